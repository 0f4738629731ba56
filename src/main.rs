use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use storefront::models::config::ServerConfig;
use storefront::repository::SanityRepository;
use storefront::routes::main::index;
use storefront::routes::products::{show_category, show_product};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let tera = Tera::new("templates/**/*.html")
        .map_err(|e| std::io::Error::other(format!("failed to parse templates: {e}")))?;

    // One configured repository shared by reference across all routes.
    let repo = SanityRepository::new(config.sanity.clone());

    log::info!(
        "Starting storefront at http://{}:{}",
        config.bind_address,
        config.port
    );

    let bind = (config.bind_address.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .service(Files::new("/static", "./static"))
            .service(index)
            .service(show_product)
            // The bare category segment must come last so fixed routes win.
            .service(show_category)
    })
    .bind(bind)?
    .run()
    .await
}
