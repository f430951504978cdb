//! Resolution engine — orchestrates extraction, the district cascade,
//! the Moscow filter, and the metro lookup over the candidate list.

use super::client::{ReverseLookup, YandexClient};
use super::components::{extract_components, parse_position};
use super::district::resolve_district;
use super::metro::resolve_metro;
use super::types::{AddressRecord, GeoObject, GeocodeError};

/// How many records a request yields when the caller does not say.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// The caller-facing geocoder.
pub struct Geocoder {
    client: YandexClient,
}

impl Geocoder {
    /// Fails fast when the API credential is missing.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: YandexClient::new(api_key)?,
        })
    }

    /// Resolve a free-text address into at most `limit` records.
    ///
    /// Propagates primary-request failures; secondary-lookup trouble only
    /// leaves fields absent.
    pub fn geocode(&self, address: &str, limit: usize) -> Result<Vec<AddressRecord>, GeocodeError> {
        let candidates = self.client.search(address, limit)?;
        Ok(resolve_candidates(&candidates, limit, &self.client))
    }
}

/// Run the pipeline over upstream candidates, preserving their order and
/// stopping once `limit` records are produced.
///
/// The district cascade runs before the Moscow filter, so a secondary
/// district lookup can be spent on a candidate that is then discarded.
/// That matches the observed behavior; Moscow-only queries dominate in
/// practice, so the wasted call stays.
pub fn resolve_candidates(
    candidates: &[GeoObject],
    limit: usize,
    lookup: &dyn ReverseLookup,
) -> Vec<AddressRecord> {
    let mut records = Vec::new();

    for geo in candidates {
        if records.len() >= limit {
            break;
        }

        let extracted = extract_components(geo.components());
        let coords = parse_position(geo.position());
        let district = resolve_district(geo, extracted.district.as_deref(), &coords, lookup);

        if !extracted.is_moscow_locality {
            continue;
        }

        let metro = resolve_metro(extracted.metro.as_deref(), &coords, lookup);

        records.push(AddressRecord {
            full_address: geo.full_address().unwrap_or_default().to_string(),
            district,
            metro,
            street: extracted.street,
            house: extracted.house,
            lat: coords.lat,
            lon: coords.lon,
        });
    }

    records
}
