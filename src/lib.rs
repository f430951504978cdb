//! Mosgeo — Moscow street address resolver.
//!
//! Turns free-text addresses into structured records (district, nearest
//! metro, street, house, coordinates) by querying the Yandex geocoder and
//! normalizing its deeply nested response shape.

pub mod geocode;
pub mod server;
pub mod storage;
