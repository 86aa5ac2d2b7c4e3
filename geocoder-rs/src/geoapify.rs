use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::GeocoderError;
use crate::types::{trim_base, Config, Provider};
use crate::utils::get_json;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoapifyResponse {
    #[serde(default)]
    pub features: Vec<GeoapifyFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoapifyFeature {
    #[serde(default)]
    pub properties: GeoapifyProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoapifyProperties {
    pub postcode: Option<String>,
}

impl GeoapifyResponse {
    pub fn postcode(&self) -> Option<&str> {
        self.features
            .first()
            .and_then(|feature| feature.properties.postcode.as_deref())
            .filter(|code| !code.is_empty())
    }
}

#[derive(Clone)]
pub struct Geoapify {
    http: Client,
    config: Arc<Config>,
}

impl Geoapify {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<GeoapifyResponse, GeocoderError> {
        let url = format!("{}/v1/geocode/reverse", trim_base(&self.config.geoapify_url));
        let request = self.http.get(url).query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("apiKey", self.config.geoapify_api_key.clone()),
        ]);
        get_json(Provider::Geoapify, request).await
    }
}
