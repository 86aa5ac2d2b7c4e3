pub mod client;
pub mod errors;
pub mod geoapify;
pub mod ip_api;
pub mod nominatim;
pub mod tomtom;
pub mod types;
pub mod utils;

pub use client::Geocoder;
