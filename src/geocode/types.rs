//! Core types for the geocode subsystem: output records, errors, and the
//! serde mapping of the Yandex response shape.
//!
//! Every wire field is optional — the upstream service omits keys freely,
//! and a missing key means "field absent", never a failed candidate.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Output record ───────────────────────────────────────────────

/// One resolved address. Constructed once per qualifying geo-object,
/// never mutated afterward.
///
/// `district` and `metro`, when present, are never "Москва"/"Moscow"
/// and never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRecord {
    pub full_address: String,
    pub district: Option<String>,
    pub metro: Option<String>,
    pub street: Option<String>,
    pub house: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

// ─── Errors ──────────────────────────────────────────────────────

/// Geocoding errors. Only the primary request can produce these —
/// secondary lookups report absence, not errors.
#[derive(Debug)]
pub enum GeocodeError {
    /// No API credential configured. Fatal at construction.
    MissingApiKey,
    Network(String),
    /// Non-200 response from the primary request.
    Http(u16),
    InvalidResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "YANDEX_API_KEY is not configured"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Http(code) => write!(f, "Geocoder HTTP error: {}", code),
            Self::InvalidResponse(msg) => write!(f, "Invalid geocoder response: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}

// ─── Wire shape ──────────────────────────────────────────────────
//
// JSON path of interest:
//   response.GeoObjectCollection.featureMember[].GeoObject
//     .name
//     .Point.pos                               ("lon lat")
//     .metaDataProperty.GeocoderMetaData
//       .text
//       .Address.Components[]                  ({kind, name})
//       .Address.{SubAdministrativeAreaName, DependentLocalityName, DistrictName}
//       .AddressDetails.Country.AdministrativeArea
//         .SubAdministrativeArea.SubAdministrativeAreaName
//         .Locality.District.DistrictName
//         .Locality.DependentLocality.DependentLocalityName

#[derive(Debug, Deserialize)]
pub struct GeocoderResponse {
    pub response: ResponseBody,
}

impl GeocoderResponse {
    /// Flatten the featureMember wrapper into the geo-object list.
    pub fn into_geo_objects(self) -> Vec<GeoObject> {
        self.response
            .collection
            .members
            .into_iter()
            .map(|m| m.geo_object)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    pub collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
pub struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    pub members: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
pub struct FeatureMember {
    #[serde(rename = "GeoObject")]
    pub geo_object: GeoObject,
}

/// One candidate result from the geocoder. Transient — consumed once per
/// resolution pass.
#[derive(Debug, Default, Deserialize)]
pub struct GeoObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "metaDataProperty", default)]
    pub meta_data_property: Option<MetaDataProperty>,
    #[serde(rename = "Point", default)]
    pub point: Option<Point>,
}

impl GeoObject {
    fn meta(&self) -> Option<&GeocoderMetaData> {
        self.meta_data_property.as_ref()?.geocoder_meta_data.as_ref()
    }

    /// The short display name (used by reverse-lookup results).
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The formatted full address text.
    pub fn full_address(&self) -> Option<&str> {
        self.meta()?.text.as_deref()
    }

    /// The flat tagged component list, or empty when absent.
    pub fn components(&self) -> &[Component] {
        self.meta()
            .and_then(|m| m.address.as_ref())
            .map(|a| a.components.as_slice())
            .unwrap_or(&[])
    }

    /// The flat `Address` object with its direct *Name fields.
    pub fn address(&self) -> Option<&Address> {
        self.meta()?.address.as_ref()
    }

    /// The nested address-details tree.
    pub fn administrative_area(&self) -> Option<&AdministrativeArea> {
        self.meta()?
            .address_details
            .as_ref()?
            .country
            .as_ref()?
            .administrative_area
            .as_ref()
    }

    /// The raw `"lon lat"` position string, or empty when absent.
    pub fn position(&self) -> &str {
        self.point
            .as_ref()
            .and_then(|p| p.pos.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MetaDataProperty {
    #[serde(rename = "GeocoderMetaData", default)]
    pub geocoder_meta_data: Option<GeocoderMetaData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeocoderMetaData {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<Address>,
    #[serde(rename = "AddressDetails", default)]
    pub address_details: Option<AddressDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(rename = "Components", default)]
    pub components: Vec<Component>,
    #[serde(rename = "SubAdministrativeAreaName", default)]
    pub sub_administrative_area_name: Option<String>,
    #[serde(rename = "DependentLocalityName", default)]
    pub dependent_locality_name: Option<String>,
    #[serde(rename = "DistrictName", default)]
    pub district_name: Option<String>,
}

/// A tagged address fragment, e.g. kind=`street`, name="Тверская".
#[derive(Debug, Default, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressDetails {
    #[serde(rename = "Country", default)]
    pub country: Option<Country>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Country {
    #[serde(rename = "AdministrativeArea", default)]
    pub administrative_area: Option<AdministrativeArea>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdministrativeArea {
    #[serde(rename = "SubAdministrativeArea", default)]
    pub sub_administrative_area: Option<SubAdministrativeArea>,
    #[serde(rename = "Locality", default)]
    pub locality: Option<Locality>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubAdministrativeArea {
    #[serde(rename = "SubAdministrativeAreaName", default)]
    pub sub_administrative_area_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Locality {
    #[serde(rename = "District", default)]
    pub district: Option<District>,
    #[serde(rename = "DependentLocality", default)]
    pub dependent_locality: Option<DependentLocality>,
}

#[derive(Debug, Default, Deserialize)]
pub struct District {
    #[serde(rename = "DistrictName", default)]
    pub district_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DependentLocality {
    #[serde(rename = "DependentLocalityName", default)]
    pub dependent_locality_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub pos: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "response": {
                "GeoObjectCollection": {
                    "featureMember": [{
                        "GeoObject": {
                            "name": "Тверская улица, 7",
                            "metaDataProperty": {
                                "GeocoderMetaData": {
                                    "text": "Россия, Москва, Тверская улица, 7",
                                    "Address": {
                                        "Components": [
                                            {"kind": "locality", "name": "Москва"},
                                            {"kind": "street", "name": "Тверская улица"}
                                        ]
                                    }
                                }
                            },
                            "Point": {"pos": "37.609218 55.758486"}
                        }
                    }]
                }
            }
        }"#;

        let parsed: GeocoderResponse = serde_json::from_str(json).unwrap();
        let objects = parsed.into_geo_objects();
        assert_eq!(objects.len(), 1);
        let geo = &objects[0];
        assert_eq!(geo.full_address(), Some("Россия, Москва, Тверская улица, 7"));
        assert_eq!(geo.components().len(), 2);
        assert_eq!(geo.position(), "37.609218 55.758486");
    }

    #[test]
    fn test_shape_mismatch_degrades_to_absent() {
        let geo: GeoObject = serde_json::from_str("{}").unwrap();
        assert!(geo.full_address().is_none());
        assert!(geo.components().is_empty());
        assert_eq!(geo.position(), "");
        assert!(geo.address().is_none());
        assert!(geo.administrative_area().is_none());
    }

    #[test]
    fn test_empty_collection() {
        let json = r#"{"response": {"GeoObjectCollection": {}}}"#;
        let parsed: GeocoderResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.into_geo_objects().is_empty());
    }
}
