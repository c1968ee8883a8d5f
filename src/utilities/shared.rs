pub static GLOBAL_CONFIG: once_cell::sync::OnceCell<crate::model::Config<'static>> =
    once_cell::sync::OnceCell::new();
pub static HEADER_VALUE_NO_CACHE: actix_web::http::header::HeaderValue =
    actix_web::http::header::HeaderValue::from_static("no-cache");
pub static HEADER_VALUE_CONTENT_HTML: once_cell::sync::Lazy<actix_web::http::header::HeaderValue> =
    once_cell::sync::Lazy::new(|| {
        actix_web::http::header::HeaderValue::from_str(mime::TEXT_HTML_UTF_8.as_ref())
            .expect("unexpected non ASCII chars in header value")
    });
