pub use chat_envelope::clean_message;
pub use content_security_policy::{build_control_ui_csp_header, parse_origin_list};
pub use shared::{GLOBAL_CONFIG, HEADER_VALUE_CONTENT_HTML, HEADER_VALUE_NO_CACHE};

mod chat_envelope;
mod content_security_policy;
pub mod macros;
mod shared;
