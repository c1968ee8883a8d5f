use crate::templates::{Template, render_template_string};

#[actix_web::get("/")]
pub async fn handle_get_request() -> actix_web::HttpResponse {
    render_page(Template::Index)
}

#[actix_web::post("/")]
pub async fn handle_post_request(
    form: actix_web::web::Form<crate::model::CleanFormArgs>,
) -> actix_web::HttpResponse {
    let strip_message_ids = form.strip_message_ids();
    let cleaned = crate::utilities::clean_message(&form.text, strip_message_ids);

    log::debug!(
        "cleaned message: {} -> {} bytes",
        form.text.len(),
        cleaned.len()
    );

    render_page(Template::Cleaned {
        cleaned: &cleaned,
        strip_message_ids,
        text: &form.text,
    })
}

fn render_page(template: Template<'_>) -> actix_web::HttpResponse {
    let mut response = actix_web::HttpResponse::new(actix_web::http::StatusCode::OK);

    response.headers_mut().insert(
        actix_web::http::header::CACHE_CONTROL,
        crate::utilities::HEADER_VALUE_NO_CACHE.clone(),
    );

    let mut response_body = response.set_body(actix_web::body::BoxBody::new(
        render_template_string(template),
    ));

    response_body.headers_mut().insert(
        actix_web::http::header::CONTENT_TYPE,
        crate::utilities::HEADER_VALUE_CONTENT_HTML.clone(),
    );

    response_body
}
