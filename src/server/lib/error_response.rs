use std::borrow::Cow;

use crate::templates::{Template, render_template_string};

#[derive(thiserror::Error, Debug)]
pub enum ErrorDetail {
    #[error("Form payload rejected")]
    Form(#[from] actix_web::error::UrlencodedError),
}

#[derive(Debug)]
pub struct ErrorMessage<'name, 'description> {
    pub name: Cow<'name, str>,
    pub description: Cow<'description, str>,
}

impl ErrorDetail {
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            ErrorDetail::Form(actix_web::error::UrlencodedError::Overflow { .. }) => {
                actix_web::http::StatusCode::PAYLOAD_TOO_LARGE
            }
            ErrorDetail::Form(actix_web::error::UrlencodedError::ContentType) => {
                actix_web::http::StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ErrorDetail::Form(_) => actix_web::http::StatusCode::BAD_REQUEST,
        }
    }
}

pub fn get_error_response(error_detail: ErrorDetail) -> actix_web::HttpResponse {
    let mut response = actix_web::HttpResponse::new(error_detail.status_code());
    let html = render_template_string(Template::Error(get_error_message(&error_detail)));

    response.headers_mut().insert(
        actix_web::http::header::CACHE_CONTROL,
        crate::utilities::HEADER_VALUE_NO_CACHE.clone(),
    );

    let mut response_body = response.set_body(actix_web::body::BoxBody::new(html));

    response_body.headers_mut().insert(
        actix_web::http::header::CONTENT_TYPE,
        crate::utilities::HEADER_VALUE_CONTENT_HTML.clone(),
    );

    response_body
}

pub fn form_error_handler(
    error: actix_web::error::UrlencodedError,
    _http_request: &actix_web::HttpRequest,
) -> actix_web::Error {
    log::warn!("form payload rejected: {}", error);

    let cause = error.to_string();

    actix_web::error::InternalError::from_response(cause, get_error_response(error.into())).into()
}

fn get_error_message(error_detail: &ErrorDetail) -> Option<ErrorMessage<'static, 'static>> {
    match error_detail {
        ErrorDetail::Form(actix_web::error::UrlencodedError::Overflow { size, limit }) => {
            Some(ErrorMessage {
                name: Cow::Borrowed("Message too large"),
                description: Cow::Owned(format!(
                    "The submitted form has {} bytes, the limit is {} bytes.",
                    size, limit
                )),
            })
        }
        ErrorDetail::Form(actix_web::error::UrlencodedError::ContentType) => Some(ErrorMessage {
            name: Cow::Borrowed("Unsupported media type"),
            description: Cow::Borrowed("The message must be submitted as a URL encoded form."),
        }),
        ErrorDetail::Form(actix_web::error::UrlencodedError::Parse(_)) => Some(ErrorMessage {
            name: Cow::Borrowed("Invalid form"),
            description: Cow::Borrowed("The submitted form doesn't contain a message text."),
        }),
        _ => None,
    }
}
