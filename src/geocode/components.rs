//! Leaf stages of the pipeline: position-string parsing and component
//! extraction from a geo-object's flat tagged list.

use super::types::Component;

/// Kinds that may carry a district name in the flat component list.
const DISTRICT_KINDS: &[&str] = &[
    "district",
    "area",
    "administrative_area_level_3",
    "administrative_area_level_2",
    "subAdministrativeArea",
    "administrative",
    "locality_area",
];

// ─── Coordinate parser ───────────────────────────────────────────

/// Coordinates kept as the upstream text — nothing downstream parses
/// them as numbers.
#[derive(Debug, Clone, Default)]
pub struct Coordinates {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl Coordinates {
    /// Both halves, or None when either is missing.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.lat.as_deref()?, self.lon.as_deref()?))
    }
}

/// Parse a `"<lon> <lat>"` position string.
///
/// Anything other than exactly two non-empty space-separated tokens
/// (empty string, one token, three tokens) yields absent coordinates —
/// missing data, not an error.
pub fn parse_position(pos: &str) -> Coordinates {
    let mut tokens = pos.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(lon), Some(lat), None) if !lon.is_empty() && !lat.is_empty() => Coordinates {
            lat: Some(lat.to_string()),
            lon: Some(lon.to_string()),
        },
        _ => Coordinates::default(),
    }
}

// ─── Component extractor ─────────────────────────────────────────

/// What the flat component list yielded for one geo-object.
#[derive(Debug, Default)]
pub struct ExtractedComponents {
    /// True iff some `locality` component is named exactly "Москва".
    pub is_moscow_locality: bool,
    pub district: Option<String>,
    pub street: Option<String>,
    pub house: Option<String>,
    pub metro: Option<String>,
}

/// Walk the component list in order.
///
/// `street`/`house`/`metro` take the last-seen value; `district` takes the
/// first component with a district-ish kind whose name is not Moscow and
/// is never overwritten afterward.
pub fn extract_components(components: &[Component]) -> ExtractedComponents {
    let mut out = ExtractedComponents::default();

    for comp in components {
        let (Some(kind), Some(name)) = (comp.kind.as_deref(), comp.name.as_deref()) else {
            continue;
        };

        match kind {
            "locality" => {
                if name == "Москва" {
                    out.is_moscow_locality = true;
                }
            }
            "street" => out.street = Some(name.to_string()),
            "house" => out.house = Some(name.to_string()),
            "metro" => out.metro = Some(name.to_string()),
            _ => {}
        }

        if out.district.is_none()
            && DISTRICT_KINDS.contains(&kind)
            && name != "Москва"
            && name != "Moscow"
        {
            out.district = Some(name.to_string());
        }
    }

    out
}
