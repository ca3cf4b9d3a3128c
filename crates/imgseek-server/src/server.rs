//! Rocket application assembly and launch

use imgseek_infrastructure::config::ServerConfig;
use rocket::{Build, Rocket, catchers, routes};
use tracing::info;

use crate::handlers::health::health;
use crate::handlers::image::serve_image;
use crate::handlers::search::search;
use crate::handlers::web::{index_page, json_catcher};
use crate::state::SearchState;

/// Build the Rocket application around `state`
pub fn rocket(state: SearchState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![index_page, search, serve_image, health])
        .register("/", catchers![json_catcher])
}

/// HTTP server for the search page and JSON API
pub struct ImageSearchServer {
    config: ServerConfig,
    state: SearchState,
}

impl ImageSearchServer {
    /// Create a server bound to `config.host:config.port`
    pub fn new(config: ServerConfig, state: SearchState) -> Self {
        Self { config, state }
    }

    /// Build the Rocket application with this server's bind address
    pub fn rocket(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        rocket(self.state.clone()).configure(figment)
    }

    /// Serve until Rocket receives a shutdown signal (Ctrl+C)
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            address = %self.config.address(),
            "Image search server listening"
        );

        self.rocket()
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        info!("Image search server stopped");
        Ok(())
    }
}
