pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod store;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{rt, web, App, HttpServer};

pub use config::Config;
pub use errors::{AppError, ServeError};
pub use store::Store;

/// The API application: the four lookup routes over `store`, with trailing
/// slashes trimmed before routing.
pub fn api_app(
    store: web::Data<Store>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(store)
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(Logger::default())
        .configure(handlers::configure_api)
}

/// The placeholder application: every request gets the same plaintext page.
pub fn web_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .default_service(web::to(handlers::site::index))
}

/// Build the API `Server` bound to `host:port`.
///
/// Binding happens here, so an address in use is reported before anything
/// is served. The caller must `.await` (or spawn) the returned server.
pub fn build_api_server(store: Store, host: &str, port: u16) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    Ok(HttpServer::new(move || api_app(store.clone()))
        .bind((host.to_string(), port))?
        .run())
}

/// Build the placeholder web `Server` bound to `host:port`.
pub fn build_web_server(host: &str, port: u16) -> std::io::Result<Server> {
    Ok(HttpServer::new(web_app)
        .bind((host.to_string(), port))?
        .run())
}

/// Bind both listeners and serve until either one stops.
pub async fn run(config: Config, store: Store) -> Result<(), ServeError> {
    let api = build_api_server(store, &config.api.host, config.api.port)?;
    log::info!("starting API server at {}", config.api);

    let site = build_web_server(&config.web.host, config.web.port)?;
    log::info!("starting web server at {}", config.web);

    supervise(api, site).await
}

#[derive(Debug, Clone, Copy)]
enum Listener {
    Api,
    Web,
}

impl std::fmt::Display for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Listener::Api => f.write_str("API"),
            Listener::Web => f.write_str("web"),
        }
    }
}

/// Run both servers. When one of them finishes, for whatever reason, the
/// other is stopped as well and the first one's outcome is returned.
///
/// Must be called from within an actix system (`#[actix_web::main]`).
pub async fn supervise(api: Server, site: Server) -> Result<(), ServeError> {
    let api_handle = api.handle();
    let site_handle = site.handle();
    let mut api_task = rt::spawn(api);
    let mut site_task = rt::spawn(site);

    let (stopped, outcome) = tokio::select! {
        res = &mut api_task => (Listener::Api, res),
        res = &mut site_task => (Listener::Web, res),
    };

    let (survivor, survivor_task) = match stopped {
        Listener::Api => (site_handle, site_task),
        Listener::Web => (api_handle, api_task),
    };
    log::info!("{} server stopped, shutting down the other listener", stopped);
    survivor.stop(true).await;
    if let Err(e) = survivor_task.await {
        log::warn!("listener task failed during shutdown: {}", e);
    }

    outcome
        .map_err(std::io::Error::other)?
        .map_err(ServeError::from)
}
