mod clean_form;
mod cli;
mod config;

pub use clean_form::CleanFormArgs;
pub use cli::Cli;
pub use config::{Config, ListenerParseError, SocketListener};
