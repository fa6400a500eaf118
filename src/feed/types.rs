///! NEO feed data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One near-Earth object from the feed, reduced to the summary fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    /// Object name, e.g. "(2019 UO)"; "no name" when the API omits it
    pub name: String,
    /// NASA's potentially-hazardous classification; false when omitted
    pub is_hazardous: bool,
    /// Upper bound of the size estimate in kilometers; -1.0 when any level
    /// of the nested diameter path is omitted
    pub max_size_km: f64,
}

/// All objects the feed reported under one calendar date key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedGroup {
    /// Date key as the API spelled it, e.g. "2025-10-04"
    pub date: String,
    /// Objects in the order the API listed them
    pub objects: Vec<NearEarthObject>,
}

/// A full snapshot of one feed fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// When this snapshot was fetched
    pub fetched_at: DateTime<Utc>,
    /// Date groups in the order the response listed them (not sorted)
    pub groups: Vec<FeedGroup>,
}

impl FeedSnapshot {
    /// Total object count across all date groups.
    pub fn total_objects(&self) -> usize {
        self.groups.iter().map(|group| group.objects.len()).sum()
    }
}
