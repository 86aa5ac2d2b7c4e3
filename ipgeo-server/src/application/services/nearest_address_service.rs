use crate::domain::{
    errors::AppError,
    models::{AddressRecord, Coordinates},
    ports::geocoding::{AddressProvider, IpLocator, PostalCodeProvider},
};

pub struct NearestAddressService<L, A, F> {
    locator: L,
    addresses: A,
    postal_fallback: F,
}

impl<L, A, F> NearestAddressService<L, A, F>
where
    L: IpLocator,
    A: AddressProvider,
    F: PostalCodeProvider,
{
    pub fn new(locator: L, addresses: A, postal_fallback: F) -> Self {
        Self {
            locator,
            addresses,
            postal_fallback,
        }
    }

    pub async fn coordinates_for(&self, ip: &str) -> Result<Coordinates, AppError> {
        self.locator.locate(ip).await
    }

    /// Reverse geocodes `coordinates`, filling a missing postal code from the
    /// fallback providers. Fails unless every address field ends up non-empty.
    pub async fn nearest_address(&self, coordinates: Coordinates) -> Result<AddressRecord, AppError> {
        let mut record = self.addresses.reverse_geocode(coordinates).await?;

        if record.postal_code.is_empty() {
            if let Some(code) = self.postal_fallback.postal_code(coordinates).await {
                record.postal_code = code;
            }
        }

        let missing = record.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        Ok(record)
    }
}
