pub mod lib;
mod routes;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Global config is not initialized")]
    Config,
    #[error("Content security policy isn't a valid header value")]
    ContentSecurityPolicy(#[from] actix_web::http::header::InvalidHeaderValue),
    #[error("Couldn't bind to '{0}'")]
    Bind(String, #[source] std::io::Error),
    #[error("HTTP workers failed")]
    Run(#[from] std::io::Error),
}

#[actix_web::main]
pub async fn start_http_service() -> Result<(), ServerError> {
    let config = crate::utilities::GLOBAL_CONFIG
        .get()
        .ok_or(ServerError::Config)?;
    let content_security_policy = lib::get_content_security_policy(config)?;
    let deny_framing = config.denies_framing();
    let max_message_size = config.max_message_size;

    log::debug!(
        "Content-Security-Policy: {:?}",
        &content_security_policy
    );

    let mut http_server = actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Compress::default())
            .wrap(actix_web::middleware::NormalizePath::new(
                actix_web::middleware::TrailingSlash::Trim,
            ))
            .wrap(actix_web::middleware::Logger::new("%a '%r' %s %T"))
            .wrap(lib::get_default_headers_middleware(
                content_security_policy.clone(),
                deny_framing,
            ))
            .configure(configure_routes(max_message_size))
    })
    .backlog(4096)
    .shutdown_timeout(5);

    if let Some(worker_count) = config.worker_count {
        http_server = http_server.workers(worker_count);
    }

    let http_server = match &config.listen {
        crate::model::SocketListener::Tcp(address) => http_server.bind(address),
        #[cfg(unix)]
        crate::model::SocketListener::Unix(path) => http_server.bind_uds(path),
    }
    .map_err(|err| ServerError::Bind(format!("{:?}", &config.listen), err))?;

    log::info!("Listening on {:?}", &config.listen);

    Ok(http_server.run().await?)
}

pub fn configure_routes(
    max_message_size: usize,
) -> impl FnOnce(&mut actix_web::web::ServiceConfig) {
    move |service_config: &mut actix_web::web::ServiceConfig| {
        service_config
            .app_data(
                actix_web::web::FormConfig::default()
                    .limit(max_message_size)
                    .error_handler(lib::form_error_handler),
            )
            .service(crate::static_asset_route!(
                "/main.css",
                crate::assets::MAIN_STYLESHEET,
                "text/css"
            ))
            .service(crate::static_asset_route!(
                "/robots.txt",
                crate::assets::ROBOTS_FILE,
                "text/plain"
            ))
            .service(routes::handle_get_request)
            .service(routes::handle_post_request);
    }
}
