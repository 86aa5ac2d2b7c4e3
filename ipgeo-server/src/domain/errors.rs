use geocoder_rs::errors::GeocoderError;
use thiserror::Error;

use super::models::AddressField;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Geocoder(#[from] GeocoderError),
    #[error("failed to get coordinates for IP: {0}")]
    ProviderStatus(String),
    #[error("no coordinates returned for the given IP")]
    NoCoordinates,
    #[error("no address found for the given coordinates")]
    NoAddress,
    #[error("missing required fields: {}", labels(.0))]
    MissingFields(Vec<AddressField>),
}

fn labels(fields: &[AddressField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
