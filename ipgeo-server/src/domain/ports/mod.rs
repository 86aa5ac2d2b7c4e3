pub mod geocoding;

#[cfg(test)]
pub mod fakes;
