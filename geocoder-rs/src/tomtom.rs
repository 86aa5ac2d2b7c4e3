use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::GeocoderError;
use crate::types::{trim_base, Config, Provider};
use crate::utils::get_json;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub addresses: Vec<ReverseGeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeResult {
    #[serde(default)]
    pub address: TomTomAddress,
}

/// The subset of TomTom's address object we read. Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TomTomAddress {
    pub country: String,
    pub street_name: String,
    pub street_number: String,
    pub municipality: String,
    pub country_subdivision_name: String,
    pub extended_postal_code: String,
}

impl ReverseGeocodeResponse {
    pub fn first_address(&self) -> Option<&TomTomAddress> {
        self.addresses.first().map(|result| &result.address)
    }
}

#[derive(Clone)]
pub struct TomTom {
    http: Client,
    config: Arc<Config>,
}

impl TomTom {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    pub fn reverse_geocode_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/search/2/reverseGeocode/{lat},{lon}.json",
            trim_base(&self.config.tomtom_url)
        )
    }

    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<ReverseGeocodeResponse, GeocoderError> {
        let request = self
            .http
            .get(self.reverse_geocode_url(lat, lon))
            .query(&[("key", self.config.tomtom_api_key.as_str())]);
        get_json(Provider::TomTom, request).await
    }
}
