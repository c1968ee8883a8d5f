pub use content_security_policy::{get_content_security_policy, get_default_headers_middleware};
pub use error_response::{ErrorDetail, ErrorMessage, form_error_handler, get_error_response};

mod content_security_policy;
mod error_response;
