use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Origins allowed to embed the control UI (comma or space separated)
    #[clap(short, long, env = "OPENCLAW_ALLOWED_FRAME_ANCESTORS")]
    pub allowed_frame_ancestors: Option<String>,
    /// Address and port to listen on (HTTP), or a unix socket path
    #[clap(short, long, env = "CLAWGATE_LISTEN_ADDRESS")]
    pub listen: String,
    /// Log level to use. WARNING: anything below WARN can leak message contents
    #[clap(short = 'v', long, env = "CLAWGATE_LOG_LEVEL", default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,
    /// Upper limit in bytes for submitted message forms
    #[clap(
        short,
        long,
        env = "CLAWGATE_MAX_MESSAGE_SIZE",
        default_value_t = 65_536
    )]
    pub max_message_size: usize,
    /// Number of HTTP workers (defaults to the number of physical CPU cores)
    #[clap(short, long, env = "CLAWGATE_WORKER_COUNT")]
    pub worker_count: Option<usize>,
}
