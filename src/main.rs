use actix_cors::Cors;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use terem_site::config::Settings;
use terem_site::db::{create_pool, seed};
use terem_site::server::configure_app;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");

    let db = create_pool(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    seed::initialize_default_data(&db)
        .await
        .expect("Failed to seed default data");
    tracing::info!("Default data initialized");

    tokio::fs::create_dir_all(&settings.upload_dir).await?;

    let bind_addr = format!("0.0.0.0:{}", settings.port);
    tracing::info!("Server running at http://{bind_addr}");

    let app_config = configure_app(db, settings);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new().wrap(cors).configure(app_config.clone())
    })
    .bind(&bind_addr)?
    .run()
    .await
}
