//! District resolver — an ordered cascade of attempt functions.
//!
//! Cascade: inline component → nested AddressDetails tiers → flat Address
//! fields → reverse lookup by coordinates. Every candidate is rejected
//! when empty or named Moscow itself; rejection moves the cascade on.

use super::client::{LookupKind, ReverseLookup};
use super::components::Coordinates;
use super::normalize::strip_district_label;
use super::types::{GeoObject, Locality};

/// One source the cascade may draw a district name from.
type Attempt = fn(&GeoObject) -> Option<String>;

/// Tree and flat-address sources, in strict priority order.
const ATTEMPTS: &[Attempt] = &[
    from_locality_district,
    from_sub_administrative_area,
    from_dependent_locality,
    from_address_sub_administrative_area,
    from_address_dependent_locality,
    from_address_district,
];

/// Resolve a district name for one geo-object.
///
/// `inline` is the component extractor's candidate and takes priority.
/// The reverse lookup runs last, and only when both coordinates are
/// present; its absence (including network trouble) is a normal value.
pub fn resolve_district(
    geo: &GeoObject,
    inline: Option<&str>,
    coords: &Coordinates,
    lookup: &dyn ReverseLookup,
) -> Option<String> {
    if let Some(district) = accept(inline) {
        return Some(district);
    }

    for attempt in ATTEMPTS {
        if let Some(district) = attempt(geo).as_deref().and_then(|s| accept(Some(s))) {
            return Some(district);
        }
    }

    from_reverse_lookup(coords, lookup)
}

/// Filter applied to every candidate at every tier: trimmed, non-empty,
/// and not the city itself.
fn accept(candidate: Option<&str>) -> Option<String> {
    let name = candidate?.trim();
    if name.is_empty() || name == "Москва" || name == "Moscow" {
        None
    } else {
        Some(name.to_string())
    }
}

fn locality(geo: &GeoObject) -> Option<&Locality> {
    geo.administrative_area()?.locality.as_ref()
}

fn from_locality_district(geo: &GeoObject) -> Option<String> {
    locality(geo)?.district.as_ref()?.district_name.clone()
}

fn from_sub_administrative_area(geo: &GeoObject) -> Option<String> {
    geo.administrative_area()?
        .sub_administrative_area
        .as_ref()?
        .sub_administrative_area_name
        .clone()
}

fn from_dependent_locality(geo: &GeoObject) -> Option<String> {
    locality(geo)?
        .dependent_locality
        .as_ref()?
        .dependent_locality_name
        .clone()
}

fn from_address_sub_administrative_area(geo: &GeoObject) -> Option<String> {
    geo.address()?.sub_administrative_area_name.clone()
}

fn from_address_dependent_locality(geo: &GeoObject) -> Option<String> {
    geo.address()?.dependent_locality_name.clone()
}

fn from_address_district(geo: &GeoObject) -> Option<String> {
    geo.address()?.district_name.clone()
}

fn from_reverse_lookup(coords: &Coordinates, lookup: &dyn ReverseLookup) -> Option<String> {
    let (lat, lon) = coords.pair()?;
    let results = lookup.reverse(lon, lat, LookupKind::District, 1)?;
    let name = results.first()?.display_name()?;
    accept(Some(&strip_district_label(name)))
}
