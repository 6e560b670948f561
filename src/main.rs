use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use jsair_pages::config::Config;
use jsair_pages::handlers;
use jsair_pages::store::EpisodeStore;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::new().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let store = EpisodeStore::load(&config.data.dir).unwrap_or_else(|e| {
        error!("Failed to load episode data from {}: {}", config.data.dir.display(), e);
        std::process::exit(1);
    });

    let address = config.bind_address();
    info!("Serving episode pages for {} on {}", config.site.url, address);

    let store = web::Data::new(store);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .configure(handlers::configure)
    })
    .bind(address)?
    .run()
    .await
}
