use std::future::Future;
use std::time::Duration;

use crate::domain::{
    errors::AppError,
    models::{AddressRecord, Coordinates},
};

pub trait IpLocator: Send + Sync + 'static {
    fn locate(&self, ip: &str) -> impl Future<Output = Result<Coordinates, AppError>> + Send;
}

/// Primary reverse geocoder. The returned record may still have empty fields.
pub trait AddressProvider: Send + Sync + 'static {
    fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<AddressRecord, AppError>> + Send;
}

/// A best-effort postal code source. Failures are reported as `None`.
pub trait PostalCodeProvider: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// Pause to observe before each request to this provider.
    fn courtesy_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn postal_code(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Option<String>> + Send;
}
