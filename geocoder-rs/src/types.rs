use std::fmt;

/// The upstream services this crate knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    IpApi,
    TomTom,
    Nominatim,
    Geoapify,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::IpApi => "ip-api.com",
            Provider::TomTom => "TomTom",
            Provider::Nominatim => "Nominatim",
            Provider::Geoapify => "Geoapify",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ip_api_url: String,
    pub tomtom_url: String,
    pub tomtom_api_key: String,
    pub nominatim_url: String,
    /// Nominatim rejects requests without an identifying User-Agent.
    pub nominatim_user_agent: String,
    pub geoapify_url: String,
    pub geoapify_api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_api_url: "http://ip-api.com".to_string(),
            tomtom_url: "https://api.tomtom.com".to_string(),
            tomtom_api_key: String::new(),
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            nominatim_user_agent: "IPGeoApp/1.0".to_string(),
            geoapify_url: "https://api.geoapify.com".to_string(),
            geoapify_api_key: String::new(),
        }
    }
}

pub(crate) fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
