use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use crate::domain::{
    errors::AppError,
    models::{AddressRecord, Coordinates},
    ports::geocoding::{AddressProvider, IpLocator, PostalCodeProvider},
};

#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct FakeLocator {
    result: Result<Coordinates, String>,
    pub calls: Calls,
}

impl FakeLocator {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Ok(Coordinates::new(latitude, longitude)),
            calls: Calls::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Calls::default(),
        }
    }
}

impl IpLocator for FakeLocator {
    async fn locate(&self, _ip: &str) -> Result<Coordinates, AppError> {
        self.calls.hit();
        self.result.clone().map_err(AppError::ProviderStatus)
    }
}

pub struct FakeAddresses {
    record: Option<AddressRecord>,
    pub calls: Calls,
}

impl FakeAddresses {
    pub fn returning(record: AddressRecord) -> Self {
        Self {
            record: Some(record),
            calls: Calls::default(),
        }
    }

    pub fn empty() -> Self {
        Self {
            record: None,
            calls: Calls::default(),
        }
    }
}

impl AddressProvider for FakeAddresses {
    async fn reverse_geocode(&self, _coordinates: Coordinates) -> Result<AddressRecord, AppError> {
        self.calls.hit();
        self.record.clone().ok_or(AppError::NoAddress)
    }
}

pub struct FakePostal {
    name: &'static str,
    code: Option<String>,
    delay: Duration,
    pub calls: Calls,
}

impl FakePostal {
    pub fn returning(name: &'static str, code: &str) -> Self {
        Self {
            name,
            code: Some(code.to_string()),
            delay: Duration::ZERO,
            calls: Calls::default(),
        }
    }

    pub fn nothing(name: &'static str) -> Self {
        Self {
            name,
            code: None,
            delay: Duration::ZERO,
            calls: Calls::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl PostalCodeProvider for FakePostal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn courtesy_delay(&self) -> Duration {
        self.delay
    }

    async fn postal_code(&self, _coordinates: Coordinates) -> Option<String> {
        self.calls.hit();
        self.code.clone()
    }
}

pub fn full_address() -> AddressRecord {
    AddressRecord {
        country: "United States".to_string(),
        street_address: "West 1st Street, 120".to_string(),
        city: "Cheney".to_string(),
        state_province: "Kansas".to_string(),
        postal_code: "67025-9005".to_string(),
    }
}

pub fn address_without_postal_code() -> AddressRecord {
    AddressRecord {
        postal_code: String::new(),
        ..full_address()
    }
}
