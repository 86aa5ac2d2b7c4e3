use std::time::Duration;

use anyhow::Context;
use config::{Environment, File};
use serde::Deserialize;

const DEFAULT_SERVER_PORT: i64 = 5001;

const DEFAULT_NOMINATIM_DELAY_MS: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub server_port: u16,
    pub tomtom_api_key: String,
    pub geoapify_api_key: String,
    pub nominatim_user_agent: String,
    pub nominatim_delay_ms: u64,
    pub ip_api_url: String,
    pub tomtom_url: String,
    pub nominatim_url: String,
    pub geoapify_url: String,
}

impl Config {
    /// Layers `config.toml` and environment variables (after loading `.env`) over defaults.
    pub fn load() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::from_sources(Environment::default())
    }

    fn from_sources(env: Environment) -> anyhow::Result<Config> {
        let endpoints = geocoder_rs::types::Config::default();

        let conf = config::Config::builder()
            .set_default("server_port", DEFAULT_SERVER_PORT)?
            .set_default("nominatim_user_agent", endpoints.nominatim_user_agent)?
            .set_default("nominatim_delay_ms", DEFAULT_NOMINATIM_DELAY_MS)?
            .set_default("ip_api_url", endpoints.ip_api_url)?
            .set_default("tomtom_url", endpoints.tomtom_url)?
            .set_default("nominatim_url", endpoints.nominatim_url)?
            .set_default("geoapify_url", endpoints.geoapify_url)?
            .add_source(File::with_name("config.toml").required(false))
            .add_source(env)
            .build()
            .context("failed to read configuration")?;

        let config: Config = conf
            .try_deserialize()
            .context("invalid configuration (TOMTOM_API_KEY and GEOAPIFY_API_KEY are required)")?;

        anyhow::ensure!(!config.tomtom_api_key.is_empty(), "TOMTOM_API_KEY is empty");
        anyhow::ensure!(
            !config.geoapify_api_key.is_empty(),
            "GEOAPIFY_API_KEY is empty"
        );

        Ok(config)
    }

    pub fn nominatim_delay(&self) -> Duration {
        Duration::from_millis(self.nominatim_delay_ms)
    }

    pub fn geocoder_config(&self) -> geocoder_rs::types::Config {
        geocoder_rs::types::Config {
            ip_api_url: self.ip_api_url.clone(),
            tomtom_url: self.tomtom_url.clone(),
            tomtom_api_key: self.tomtom_api_key.clone(),
            nominatim_url: self.nominatim_url.clone(),
            nominatim_user_agent: self.nominatim_user_agent.clone(),
            geoapify_url: self.geoapify_url.clone(),
            geoapify_api_key: self.geoapify_api_key.clone(),
        }
    }
}
