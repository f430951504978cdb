//! File-backed log of unique submitted addresses at ~/.mosgeo/requests.json.
//!
//! Uniqueness is enforced on the trimmed address text, independent of the
//! resolution outcome; duplicates keep their first-seen timestamp.

use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// One logged request, newest-first in `get_last`.
#[derive(Debug, Clone, Serialize)]
pub struct LoggedRequest {
    pub address: String,
    pub created_at: String,
}

/// The unique request log. Persisted best-effort — a broken disk never
/// fails a geocode request.
pub struct RequestLog {
    path: PathBuf,
    // address → first-seen timestamp (epoch millis)
    entries: HashMap<String, i64>,
}

impl RequestLog {
    /// Open the log at the default location (~/.mosgeo/requests.json).
    pub fn open() -> Self {
        Self::open_at(Self::default_path())
    }

    /// Open the log at a specific path (for testing).
    pub fn open_at(path: PathBuf) -> Self {
        let entries = Self::read_file(&path).unwrap_or_default();
        Self { path, entries }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mosgeo")
            .join("requests.json")
    }

    fn read_file(path: &PathBuf) -> Option<HashMap<String, i64>> {
        let data = fs::read_to_string(path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Record an address. Idempotent: an already-known trimmed address is
    /// silently ignored.
    pub fn save_unique(&mut self, address: &str) {
        let key = address.trim();
        if key.is_empty() || self.entries.contains_key(key) {
            return;
        }
        self.entries
            .insert(key.to_string(), Utc::now().timestamp_millis());
        self.persist();
    }

    /// The last `n` unique requests, newest first.
    pub fn get_last(&self, n: usize) -> Vec<LoggedRequest> {
        let mut ordered: Vec<(&String, &i64)> = self.entries.iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(a.1));
        ordered
            .into_iter()
            .take(n)
            .map(|(address, millis)| LoggedRequest {
                address: address.clone(),
                created_at: format_timestamp(*millis),
            })
            .collect()
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&self.entries) {
            let _ = fs::write(&self.path, json);
        }
    }

    /// Number of stored addresses (for testing).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn format_timestamp(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
