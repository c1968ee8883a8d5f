pub use index::{handle_get_request, handle_post_request};

mod index;
