#![deny(
    clippy::correctness,
    clippy::style,
    keyword_idents,
    macro_use_extern_crate,
    non_ascii_idents,
    nonstandard_style,
    noop_method_call,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_crate_dependencies
)]
#![warn(
    clippy::cargo,
    clippy::complexity,
    clippy::perf,
    clippy::suspicious,
    rust_2018_idioms,
    unused
)]
#![allow(clippy::multiple_crate_versions)]

mod assets;
mod model;
mod server;
mod templates;
mod utilities;

fn main() -> std::process::ExitCode {
    let config = match get_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return std::process::ExitCode::FAILURE;
        }
    };

    init_logging(&config);
    log::debug!("{:?}", &config);

    if utilities::GLOBAL_CONFIG.set(config).is_err() {
        log::error!("Failed to set global config");
        return std::process::ExitCode::FAILURE;
    }

    match server::start_http_service() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}: {:?}", err, err);
            std::process::ExitCode::FAILURE
        }
    }
}

fn get_config() -> Result<model::Config<'static>, model::ListenerParseError> {
    use clap::Parser;

    let args: model::Cli = model::Cli::parse();

    Ok(model::Config {
        allowed_frame_ancestors: args.allowed_frame_ancestors.map(std::borrow::Cow::Owned),
        listen: args.listen.parse()?,
        log_level: args.log_level,
        max_message_size: args.max_message_size,
        worker_count: args.worker_count,
    })
}

fn init_logging(config: &model::Config<'_>) {
    if config.log_level != log::LevelFilter::Off {
        let mut logger = fern::Dispatch::new().level(config.log_level);

        if config.log_level != log::LevelFilter::Error {
            logger = logger.chain(
                fern::Dispatch::new()
                    .filter(|meta| meta.level() != log::LevelFilter::Error)
                    .chain(std::io::stdout()),
            )
        }

        if let Err(err) = logger
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Error)
                    .chain(std::io::stderr()),
            )
            .apply()
        {
            eprintln!("logging subscriber registration failed: {}", err);
        }
    } else {
        log::set_max_level(config.log_level);
    }
}
