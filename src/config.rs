use std::env;

use anyhow::{Context, Result};
use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
}

impl Config {
    /// Loads the config from a local .env file using `dotenv`.
    ///
    /// - `WARBLE_SERVER_URL`: Root URL of the warble server, e.g.
    ///   `http://localhost:5000`
    pub fn load_env_config() -> Result<Self> {
        dotenv().ok();
        Ok(Config {
            server_url: env::var("WARBLE_SERVER_URL")
                .context("WARBLE_SERVER_URL environment variable must be set")?,
        })
    }
}
