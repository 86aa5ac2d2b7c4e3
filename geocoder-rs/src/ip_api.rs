use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::GeocoderError;
use crate::types::{trim_base, Config, Provider};
use crate::utils::get_json;

const FIELDS: &str = "status,message,lat,lon";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpApiResponse {
    pub status: String,
    pub message: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl IpApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Clone)]
pub struct IpApi {
    http: Client,
    config: Arc<Config>,
}

impl IpApi {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    pub fn lookup_url(&self, ip: &str) -> String {
        format!(
            "{}/json/{ip}?fields={FIELDS}",
            trim_base(&self.config.ip_api_url)
        )
    }

    /// Geolocates `ip`. A `fail` status is returned as data, not as an error.
    pub async fn lookup(&self, ip: &str) -> Result<IpApiResponse, GeocoderError> {
        let request = self.http.get(self.lookup_url(ip));
        get_json(Provider::IpApi, request).await
    }
}
