use std::sync::Arc;

use geocoder_rs::Geocoder;

use crate::{
    application::services::{
        nearest_address_service::NearestAddressService, postal_fallback::PostalFallbackChain,
    },
    config::Config,
    infrastructure::repository::geocoder_repository::{
        GeoapifyRepository, IpApiRepository, NominatimRepository, TomTomRepository,
    },
};

pub struct AppState<L, A, F> {
    pub service: Arc<NearestAddressService<L, A, F>>,
}

impl<L, A, F> Clone for AppState<L, A, F> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

pub type GeocoderState = AppState<
    IpApiRepository,
    TomTomRepository,
    PostalFallbackChain<NominatimRepository, GeoapifyRepository>,
>;

impl GeocoderState {
    pub fn from_config(config: &Config) -> Self {
        let geocoder = Geocoder::init(Some(config.geocoder_config()));

        let service = NearestAddressService::new(
            IpApiRepository::new(geocoder.ip_api),
            TomTomRepository::new(geocoder.tomtom),
            PostalFallbackChain::new(
                NominatimRepository::new(geocoder.nominatim, config.nominatim_delay()),
                GeoapifyRepository::new(geocoder.geoapify),
            ),
        );

        Self {
            service: Arc::new(service),
        }
    }
}
