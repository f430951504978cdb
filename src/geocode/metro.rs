//! Metro resolver — inline component first, reverse lookup second.

use super::client::{LookupKind, ReverseLookup};
use super::components::Coordinates;
use super::normalize::strip_metro_label;

/// Resolve the nearest metro station name for one geo-object.
///
/// An inline `metro` component wins outright — it is already a clean
/// proper noun. Otherwise a reverse lookup (`kind=metro`, up to 5 results)
/// runs against the coordinates and the first display name containing
/// "метро" is taken, with the station boilerplate stripped. Everything
/// that can go wrong here yields `None`, never an error.
pub fn resolve_metro(
    inline: Option<&str>,
    coords: &Coordinates,
    lookup: &dyn ReverseLookup,
) -> Option<String> {
    if let Some(metro) = accept(inline) {
        return Some(metro);
    }

    let (lat, lon) = coords.pair()?;
    let results = lookup.reverse(lon, lat, LookupKind::Metro, 5)?;

    results
        .iter()
        .filter_map(|geo| geo.display_name())
        .find(|name| name.to_lowercase().contains("метро"))
        .map(strip_metro_label)
        .and_then(|name| accept(Some(&name)))
}

fn accept(candidate: Option<&str>) -> Option<String> {
    let name = candidate?.trim();
    if name.is_empty() || name == "Москва" || name == "Moscow" {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::types::GeoObject;
    use std::cell::RefCell;

    struct StubLookup {
        names: Vec<&'static str>,
        calls: RefCell<usize>,
    }

    impl StubLookup {
        fn with_names(names: &[&'static str]) -> Self {
            Self { names: names.to_vec(), calls: RefCell::new(0) }
        }

        fn silent() -> Self {
            Self::with_names(&[])
        }
    }

    impl ReverseLookup for StubLookup {
        fn reverse(
            &self,
            _lon: &str,
            _lat: &str,
            kind: LookupKind,
            limit: usize,
        ) -> Option<Vec<GeoObject>> {
            assert_eq!(kind, LookupKind::Metro);
            assert_eq!(limit, 5);
            *self.calls.borrow_mut() += 1;
            if self.names.is_empty() {
                return None;
            }
            let value = serde_json::json!(self.names
                .iter()
                .map(|n| serde_json::json!({"name": n}))
                .collect::<Vec<_>>());
            serde_json::from_value(value).ok()
        }
    }

    fn coords() -> Coordinates {
        Coordinates {
            lat: Some("55.75".into()),
            lon: Some("37.61".into()),
        }
    }

    #[test]
    fn test_inline_component_preferred() {
        let lookup = StubLookup::with_names(&["станция метро Арбатская"]);
        let metro = resolve_metro(Some("Тверская"), &coords(), &lookup);
        assert_eq!(metro.as_deref(), Some("Тверская"));
        assert_eq!(*lookup.calls.borrow(), 0);
    }

    #[test]
    fn test_reverse_lookup_strips_station_phrase() {
        let lookup = StubLookup::with_names(&["станция метро Тверская"]);
        let metro = resolve_metro(None, &coords(), &lookup);
        assert_eq!(metro.as_deref(), Some("Тверская"));
    }

    #[test]
    fn test_first_matching_result_taken() {
        let lookup = StubLookup::with_names(&[
            "Пушкинская площадь",
            "метро Пушкинская",
            "метро Чеховская",
        ]);
        let metro = resolve_metro(None, &coords(), &lookup);
        assert_eq!(metro.as_deref(), Some("Пушкинская"));
    }

    #[test]
    fn test_no_match_is_absent() {
        let lookup = StubLookup::with_names(&["Пушкинская площадь"]);
        assert!(resolve_metro(None, &coords(), &lookup).is_none());
    }

    #[test]
    fn test_failed_lookup_is_absent() {
        assert!(resolve_metro(None, &coords(), &StubLookup::silent()).is_none());
    }

    #[test]
    fn test_no_coordinates_skips_lookup() {
        let lookup = StubLookup::with_names(&["метро Тверская"]);
        let metro = resolve_metro(None, &Coordinates::default(), &lookup);
        assert!(metro.is_none());
        assert_eq!(*lookup.calls.borrow(), 0);
    }

    #[test]
    fn test_empty_inline_falls_through() {
        let lookup = StubLookup::with_names(&["метро Тверская"]);
        let metro = resolve_metro(Some("  "), &coords(), &lookup);
        assert_eq!(metro.as_deref(), Some("Тверская"));
    }
}
