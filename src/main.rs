use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use deck_quiz_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};
use secrecy::ExposeSecret;

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .expose_headers(vec!["x-request-id"])
        .max_age(3600);

    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;
    log::info!(
        "Using model {} at {} (key length {})",
        config.model_name,
        config.model_api_base,
        config.model_api_key.expose_secret().len()
    );

    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;
    let bind = (config.web_server_host.clone(), config.web_server_port);
    let max_upload_bytes = config.max_upload_bytes;
    let allowed_origin = config.cors_allowed_origin.clone();

    log::info!("starting HTTP server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .wrap(cors(allowed_origin.as_deref()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await
}
