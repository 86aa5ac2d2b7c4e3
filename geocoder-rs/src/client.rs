use std::sync::Arc;

use reqwest::Client;

use crate::geoapify::Geoapify;
use crate::ip_api::IpApi;
use crate::nominatim::Nominatim;
use crate::tomtom::TomTom;
use crate::types::Config;

/// Entry point bundling every provider client over one connection pool.
#[derive(Clone)]
pub struct Geocoder {
    pub config: Arc<Config>,
    pub ip_api: IpApi,
    pub tomtom: TomTom,
    pub nominatim: Nominatim,
    pub geoapify: Geoapify,
}

impl Geocoder {
    pub fn init(config: Option<Config>) -> Self {
        Self::with_client(Client::new(), config.unwrap_or_default())
    }

    pub fn with_client(http: Client, config: Config) -> Self {
        let config = Arc::new(config);
        Self {
            ip_api: IpApi::new(http.clone(), config.clone()),
            tomtom: TomTom::new(http.clone(), config.clone()),
            nominatim: Nominatim::new(http.clone(), config.clone()),
            geoapify: Geoapify::new(http, config.clone()),
            config,
        }
    }
}
