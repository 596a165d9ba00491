use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use socratic_server::{app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.run_mode == "production" {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origins = config.allowed_origins.clone();

    log::info!("provider endpoint: {}", config.provider_api_url);
    log::info!(
        "starting HTTP server on {}:{} in {} mode",
        host,
        port,
        config.run_mode
    );

    let state = AppState::new(config);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .supports_credentials();
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .service(handlers::root)
            .service(handlers::start)
            .service(handlers::evaluate)
            .service(handlers::rephrase)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
