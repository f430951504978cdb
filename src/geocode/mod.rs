//! Address resolution subsystem.
//!
//! The pipeline turns one Yandex geocoder response into a bounded list of
//! clean [`AddressRecord`]s: component extraction, coordinate parsing, a
//! district fallback cascade, a metro lookup, and Moscow-only filtering.
//! Secondary reverse-geocode lookups backfill missing fields and degrade
//! to absence instead of failing the request.

pub mod client;
pub mod components;
pub mod district;
pub mod metro;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use client::{LookupKind, ReverseLookup, YandexClient};
pub use resolver::{Geocoder, DEFAULT_RESULT_LIMIT};
pub use types::{AddressRecord, GeoObject, GeocodeError};
