use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use folio_backend::config::AppConfig;
use folio_backend::create_pool;
use folio_backend::error::ApiError;
use folio_backend::handlers;
use folio_backend::images::ImageHost;
use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env();

    let db = create_pool(&config.database_url).await;
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    let db_data = web::Data::new(db);

    let image_host = web::Data::new(ImageHost::new(config.image_host.clone()));
    if !image_host.is_configured() {
        tracing::info!("No image host configured; uploads will return inline data URLs");
    }

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Portfolios can embed data-URL images, so JSON bodies get a 10 MB
        // ceiling. Deserialization failures render as the standard envelope.
        let json_config = web::JsonConfig::default()
            .limit(10 * 1024 * 1024)
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .app_data(image_host.clone())
            .app_data(json_config)
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
