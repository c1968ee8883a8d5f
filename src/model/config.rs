use std::borrow::Cow;

#[derive(Debug)]
pub enum SocketListener {
    Tcp(std::net::SocketAddr),
    #[cfg(unix)]
    Unix(std::path::PathBuf),
}

#[derive(thiserror::Error, Debug)]
pub enum ListenerParseError {
    #[error("Listener could not be parsed: '{0}'")]
    Unrecognized(String),
}

#[derive(Debug)]
pub struct Config<'ancestors> {
    pub allowed_frame_ancestors: Option<Cow<'ancestors, str>>,
    pub listen: SocketListener,
    pub log_level: log::LevelFilter,
    pub max_message_size: usize,
    pub worker_count: Option<usize>,
}

impl std::str::FromStr for SocketListener {
    type Err = ListenerParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if let Ok(address) = std::net::SocketAddr::from_str(input) {
            return Ok(Self::Tcp(address));
        }

        #[cfg(unix)]
        if !input.trim().is_empty() && !input.contains(':') {
            return Ok(Self::Unix(std::path::PathBuf::from(input)));
        }

        Err(ListenerParseError::Unrecognized(String::from(input)))
    }
}

impl Config<'_> {
    pub fn content_security_policy(&self) -> String {
        crate::utilities::build_control_ui_csp_header(self.allowed_frame_ancestors.as_deref())
    }

    pub fn denies_framing(&self) -> bool {
        self.allowed_frame_ancestors
            .as_deref()
            .map(crate::utilities::parse_origin_list)
            .is_none_or(|origins| origins.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::model::{Config, SocketListener};

    fn config(allowed_frame_ancestors: Option<&'static str>) -> Config<'static> {
        Config {
            allowed_frame_ancestors: allowed_frame_ancestors.map(std::borrow::Cow::Borrowed),
            listen: SocketListener::Tcp(([127, 0, 0, 1], 8080).into()),
            log_level: log::LevelFilter::Off,
            max_message_size: 1024,
            worker_count: None,
        }
    }

    #[test]
    fn parse_tcp_listener() {
        assert!(matches!(
            SocketListener::from_str("127.0.0.1:8080"),
            Ok(SocketListener::Tcp(address)) if address.port() == 8080
        ));
        assert!(matches!(
            SocketListener::from_str("[::1]:3000"),
            Ok(SocketListener::Tcp(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn parse_unix_listener() {
        assert!(matches!(
            SocketListener::from_str("/run/clawgate.sock"),
            Ok(SocketListener::Unix(path)) if path.as_os_str() == "/run/clawgate.sock"
        ));
    }

    #[test]
    fn reject_invalid_listener() {
        assert!(SocketListener::from_str("localhost:http").is_err());
        assert!(SocketListener::from_str("  ").is_err());
    }

    #[test]
    fn framing_follows_configured_ancestors() {
        assert!(config(None).denies_framing());
        assert!(config(Some(" , ")).denies_framing());
        assert!(!config(Some("https://a.example")).denies_framing());
        assert!(
            config(Some("https://a.example"))
                .content_security_policy()
                .contains("frame-ancestors https://a.example;")
        );
    }
}
