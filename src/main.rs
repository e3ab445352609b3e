use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use tutor_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    config.validate_at_startup();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).expect("failed to initialize application state");

    log::info!("Starting tutor server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::ask_tutor)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
