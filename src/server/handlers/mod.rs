pub mod geocode;
pub mod places;
pub mod sessions;
