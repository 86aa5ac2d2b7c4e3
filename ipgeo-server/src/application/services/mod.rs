pub mod nearest_address_service;
pub mod postal_fallback;
