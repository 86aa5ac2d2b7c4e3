use std::time::Duration;

use geocoder_rs::{
    errors::GeocoderError,
    geoapify::Geoapify,
    ip_api::{IpApi, IpApiResponse},
    nominatim::Nominatim,
    tomtom::{TomTom, TomTomAddress},
};

use crate::domain::{
    errors::AppError,
    models::{street_address, AddressRecord, Coordinates},
    ports::geocoding::{AddressProvider, IpLocator, PostalCodeProvider},
};

#[derive(Clone)]
pub struct IpApiRepository {
    client: IpApi,
}

impl IpApiRepository {
    pub fn new(client: IpApi) -> Self {
        Self { client }
    }
}

impl IpLocator for IpApiRepository {
    async fn locate(&self, ip: &str) -> Result<Coordinates, AppError> {
        let response = self.client.lookup(ip).await?;
        coordinates(response)
    }
}

fn coordinates(response: IpApiResponse) -> Result<Coordinates, AppError> {
    if !response.is_success() {
        let message = response
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(AppError::ProviderStatus(message));
    }
    match (response.lat, response.lon) {
        (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
        _ => Err(AppError::NoCoordinates),
    }
}

#[derive(Clone)]
pub struct TomTomRepository {
    client: TomTom,
}

impl TomTomRepository {
    pub fn new(client: TomTom) -> Self {
        Self { client }
    }
}

impl AddressProvider for TomTomRepository {
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<AddressRecord, AppError> {
        let response = self
            .client
            .reverse_geocode(coordinates.latitude, coordinates.longitude)
            .await?;
        response
            .first_address()
            .map(address_record)
            .ok_or(AppError::NoAddress)
    }
}

fn address_record(address: &TomTomAddress) -> AddressRecord {
    AddressRecord {
        country: address.country.clone(),
        street_address: street_address(&address.street_name, &address.street_number),
        city: address.municipality.clone(),
        state_province: address.country_subdivision_name.clone(),
        postal_code: address.extended_postal_code.clone(),
    }
}

#[derive(Clone)]
pub struct NominatimRepository {
    client: Nominatim,
    delay: Duration,
}

impl NominatimRepository {
    pub fn new(client: Nominatim, delay: Duration) -> Self {
        Self { client, delay }
    }
}

impl PostalCodeProvider for NominatimRepository {
    fn name(&self) -> &'static str {
        "Nominatim"
    }

    fn courtesy_delay(&self) -> Duration {
        self.delay
    }

    async fn postal_code(&self, coordinates: Coordinates) -> Option<String> {
        let result = self
            .client
            .reverse(coordinates.latitude, coordinates.longitude)
            .await
            .map(|place| place.postcode().map(str::to_owned));
        settle(self.name(), result)
    }
}

#[derive(Clone)]
pub struct GeoapifyRepository {
    client: Geoapify,
}

impl GeoapifyRepository {
    pub fn new(client: Geoapify) -> Self {
        Self { client }
    }
}

impl PostalCodeProvider for GeoapifyRepository {
    fn name(&self) -> &'static str {
        "Geoapify"
    }

    async fn postal_code(&self, coordinates: Coordinates) -> Option<String> {
        let result = self
            .client
            .reverse(coordinates.latitude, coordinates.longitude)
            .await
            .map(|response| response.postcode().map(str::to_owned));
        settle(self.name(), result)
    }
}

// Fallback failures never propagate; they only differ from "no postal code" in the logs.
fn settle(provider: &str, result: Result<Option<String>, GeocoderError>) -> Option<String> {
    match result {
        Ok(Some(code)) => Some(code),
        Ok(None) => {
            tracing::debug!(provider, "no postal code in response");
            None
        }
        Err(e) => {
            tracing::warn!(provider, error = %e, "postal code lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip_api_response(
        status: &str,
        message: Option<&str>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> IpApiResponse {
        IpApiResponse {
            status: status.to_string(),
            message: message.map(str::to_owned),
            lat,
            lon,
        }
    }

    #[test]
    fn success_yields_reported_coordinates() {
        let response = ip_api_response("success", None, Some(37.751), Some(-97.822));
        assert_eq!(
            coordinates(response).unwrap(),
            Coordinates::new(37.751, -97.822)
        );
    }

    #[test]
    fn fail_status_carries_provider_message() {
        let err = coordinates(ip_api_response("fail", Some("private range"), None, None)).unwrap_err();
        assert!(matches!(&err, AppError::ProviderStatus(message) if message == "private range"));
        assert_eq!(
            err.to_string(),
            "failed to get coordinates for IP: private range"
        );
    }

    #[test]
    fn fail_status_without_message() {
        let err = coordinates(ip_api_response("fail", None, None, None)).unwrap_err();
        assert!(matches!(&err, AppError::ProviderStatus(message) if message == "unknown error"));
    }

    #[test]
    fn success_without_coordinates() {
        let err = coordinates(ip_api_response("success", None, Some(37.751), None)).unwrap_err();
        assert!(matches!(err, AppError::NoCoordinates));
    }

    #[test]
    fn maps_tomtom_address() {
        let address = TomTomAddress {
            country: "Brasil".to_string(),
            street_name: "Avenida Paulista".to_string(),
            street_number: "1578".to_string(),
            municipality: "São Paulo".to_string(),
            country_subdivision_name: "São Paulo".to_string(),
            extended_postal_code: "01310-200".to_string(),
        };

        let record = address_record(&address);

        assert_eq!(record.street_address, "Avenida Paulista, 1578");
        assert_eq!(record.city, "São Paulo");
        assert_eq!(record.state_province, "São Paulo");
        assert_eq!(record.postal_code, "01310-200");
    }

    #[test]
    fn street_without_number() {
        let address = TomTomAddress {
            street_name: "Avenida Paulista".to_string(),
            ..TomTomAddress::default()
        };
        assert_eq!(address_record(&address).street_address, "Avenida Paulista");
    }

    #[test]
    fn failed_lookup_settles_to_none() {
        let source = serde_json::from_str::<serde_json::Value>("oops").unwrap_err();
        let err = GeocoderError::Decode {
            provider: geocoder_rs::types::Provider::Nominatim,
            source,
            body: "oops".to_string(),
        };
        assert_eq!(settle("Nominatim", Err(err)), None);
        assert_eq!(settle("Nominatim", Ok(None)), None);
        assert_eq!(
            settle("Nominatim", Ok(Some("01310-100".to_string()))),
            Some("01310-100".to_string())
        );
    }
}
