use actix_web::http::header::{HeaderValue, InvalidHeaderValue};

pub fn get_content_security_policy(
    config: &crate::model::Config<'_>,
) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(config.content_security_policy().as_str())
}

pub fn get_default_headers_middleware(
    content_security_policy: HeaderValue,
    deny_framing: bool,
) -> actix_web::middleware::DefaultHeaders {
    let default_headers = actix_web::middleware::DefaultHeaders::new()
        .add((
            actix_web::http::header::CONTENT_SECURITY_POLICY,
            content_security_policy,
        ))
        .add((actix_web::http::header::REFERRER_POLICY, "no-referrer"))
        .add((actix_web::http::header::X_CONTENT_TYPE_OPTIONS, "nosniff"));

    // `X-Frame-Options` can't express an origin list, `frame-ancestors` takes over once origins are configured
    if deny_framing {
        default_headers.add((actix_web::http::header::X_FRAME_OPTIONS, "DENY"))
    } else {
        default_headers
    }
}
