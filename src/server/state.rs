use crate::geocode::Geocoder;
use crate::storage::RequestLog;
use std::sync::Mutex;

pub struct AppState {
    pub geocoder: Geocoder,
    pub log: Mutex<RequestLog>,
}
