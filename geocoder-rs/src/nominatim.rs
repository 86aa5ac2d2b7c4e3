use std::sync::Arc;

use reqwest::{header::USER_AGENT, Client, RequestBuilder};
use serde::Deserialize;

use crate::errors::GeocoderError;
use crate::types::{trim_base, Config, Provider};
use crate::utils::get_json;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub address: NominatimAddress,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimAddress {
    pub postcode: Option<String>,
}

impl NominatimPlace {
    pub fn postcode(&self) -> Option<&str> {
        self.address.postcode.as_deref().filter(|code| !code.is_empty())
    }
}

/// Client for the public OpenStreetMap Nominatim instance.
///
/// The usage policy allows one request per second; pacing is left to the caller.
#[derive(Clone)]
pub struct Nominatim {
    http: Client,
    config: Arc<Config>,
}

impl Nominatim {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    pub fn reverse_request(&self, lat: f64, lon: f64) -> RequestBuilder {
        let url = format!("{}/reverse", trim_base(&self.config.nominatim_url));
        self.http
            .get(url)
            .header(USER_AGENT, self.config.nominatim_user_agent.as_str())
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
            ])
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<NominatimPlace, GeocoderError> {
        get_json(Provider::Nominatim, self.reverse_request(lat, lon)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_request_identifies_itself() {
        let config = Config {
            nominatim_user_agent: "IPGeoApp/1.0 (ops@example.com)".to_string(),
            ..Config::default()
        };
        let api = Nominatim::new(Client::new(), Arc::new(config));

        let request = api.reverse_request(-23.561, -46.656).build().unwrap();

        assert_eq!(
            request.headers()[USER_AGENT],
            "IPGeoApp/1.0 (ops@example.com)"
        );
        assert_eq!(request.url().path(), "/reverse");
        let query: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("lat".to_string(), "-23.561".to_string()),
                ("lon".to_string(), "-46.656".to_string()),
                ("format".to_string(), "json".to_string()),
                ("addressdetails".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn reads_postcode() {
        let body = r#"{
            "place_id": 123,
            "display_name": "Avenida Paulista, São Paulo",
            "address": {"road": "Avenida Paulista", "city": "São Paulo", "postcode": "01310-100"}
        }"#;
        let place: NominatimPlace = serde_json::from_str(body).unwrap();
        assert_eq!(place.postcode(), Some("01310-100"));
    }

    #[test]
    fn error_payload_has_no_postcode() {
        let place: NominatimPlace =
            serde_json::from_str(r#"{"error":"Unable to geocode"}"#).unwrap();
        assert_eq!(place.postcode(), None);
    }

    #[test]
    fn blank_postcode_is_none() {
        let place: NominatimPlace =
            serde_json::from_str(r#"{"address":{"postcode":""}}"#).unwrap();
        assert_eq!(place.postcode(), None);
    }
}
