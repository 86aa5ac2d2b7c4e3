pub mod geocoder_repository;
