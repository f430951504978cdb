//! Blocking HTTP client for the Yandex geocoder, plus the reverse-lookup
//! collaborator interface the resolvers depend on.

use super::types::{GeoObject, GeocodeError, GeocoderResponse};
use std::time::Duration;

const GEOCODER_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

const PRIMARY_TIMEOUT: Duration = Duration::from_secs(10);
const DISTRICT_TIMEOUT: Duration = Duration::from_secs(5);
const METRO_TIMEOUT: Duration = Duration::from_secs(10);

/// What a secondary lookup is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    District,
    Metro,
}

impl LookupKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::District => "district",
            Self::Metro => "metro",
        }
    }

    fn timeout(self) -> Duration {
        match self {
            Self::District => DISTRICT_TIMEOUT,
            Self::Metro => METRO_TIMEOUT,
        }
    }
}

/// Secondary reverse-geocode collaborator.
///
/// Returns `None` for every failure mode — transport, status, malformed
/// body. Absence is a normal value here; the resolvers never catch
/// anything.
pub trait ReverseLookup {
    fn reverse(&self, lon: &str, lat: &str, kind: LookupKind, limit: usize)
        -> Option<Vec<GeoObject>>;
}

/// The real Yandex client. Stateless apart from the credential; one
/// instance serves any number of sequential requests.
pub struct YandexClient {
    api_key: String,
}

impl YandexClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeocodeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeocodeError::MissingApiKey);
        }
        Ok(Self { api_key })
    }

    /// Primary forward-geocode request. Transport errors, non-200
    /// statuses, and malformed JSON all propagate.
    pub fn search(&self, address: &str, limit: usize) -> Result<Vec<GeoObject>, GeocodeError> {
        self.request(address, None, limit, PRIMARY_TIMEOUT)
            .map(GeocoderResponse::into_geo_objects)
    }

    fn request(
        &self,
        geocode: &str,
        kind: Option<LookupKind>,
        results: usize,
        timeout: Duration,
    ) -> Result<GeocoderResponse, GeocodeError> {
        let mut request = ureq::get(GEOCODER_URL)
            .query("apikey", &self.api_key)
            .query("format", "json")
            .query("geocode", geocode)
            .query("lang", "ru_RU")
            .query("results", &results.to_string())
            .timeout(timeout);

        if let Some(kind) = kind {
            request = request.query("kind", kind.as_str());
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(code, _) => GeocodeError::Http(code),
            other => GeocodeError::Network(other.to_string()),
        })?;

        response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))
    }
}

impl ReverseLookup for YandexClient {
    fn reverse(
        &self,
        lon: &str,
        lat: &str,
        kind: LookupKind,
        limit: usize,
    ) -> Option<Vec<GeoObject>> {
        // Yandex reverse queries take "lon,lat".
        let geocode = format!("{},{}", lon, lat);
        self.request(&geocode, Some(kind), limit, kind.timeout())
            .ok()
            .map(GeocoderResponse::into_geo_objects)
    }
}
