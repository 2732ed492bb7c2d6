use image_grid::config::Config;
use image_grid::output;
use image_grid::search::ImageSearch;
use image_grid::server::WebServer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let search = ImageSearch::new(config.search_endpoint.clone());
    output::config_item("Search endpoint", search.endpoint());
    let server = WebServer::new(config.bind_addr(), search);

    match server.start().await {
        Ok(addr) => output::startup_banner(&addr.to_string()),
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        output::error(&format!("Failed to listen for shutdown signal: {}", e));
    }
    output::info("Shutting down");
}
