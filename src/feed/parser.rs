///! NASA NEO feed JSON parser
///!
///! Turns the `feed` endpoint response into a [`FeedSnapshot`]. The
///! response maps date strings to arrays of object records; date keys are
///! kept in the order the response listed them (serde_json's
///! `preserve_order` feature), never sorted.
///!
///! Defaulting policy: only *absence* of a summary field is defaulted
///! (name, hazard flag, or any level of the nested diameter path). A
///! present field of the wrong type fails the whole parse.

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use super::types::{FeedGroup, FeedSnapshot, NearEarthObject};
use crate::error::NeoError;

/// Substituted when the API omits an object's `name`.
pub const FALLBACK_NAME: &str = "no name";

/// Sentinel size for objects without a usable diameter estimate.
pub const MISSING_SIZE_KM: f64 = -1.0;

const FEED_KEY: &str = "near_earth_objects";

/// One raw object record; everything beyond the summary fields is ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: Option<String>,
    is_potentially_hazardous_asteroid: Option<bool>,
    estimated_diameter: Option<RawDiameter>,
}

#[derive(Debug, Deserialize)]
struct RawDiameter {
    kilometers: Option<RawKilometers>,
}

#[derive(Debug, Deserialize)]
struct RawKilometers {
    estimated_diameter_max: Option<f64>,
}

/// Parse the feed response body into a [`FeedSnapshot`].
///
/// Fails when the body is not valid JSON, lacks the `near_earth_objects`
/// key, or any entry has a wrong-typed summary field. Every entry in the
/// response produces exactly one [`NearEarthObject`]; none are dropped,
/// reordered within their group, or deduplicated.
pub fn parse_feed_json(body: &str) -> Result<FeedSnapshot, NeoError> {
    let root: Value = serde_json::from_str(body)?;
    let by_date = root
        .get(FEED_KEY)
        .ok_or(NeoError::MissingKey(FEED_KEY))?
        .as_object()
        .ok_or(NeoError::UnexpectedType(FEED_KEY))?;

    let mut groups = Vec::with_capacity(by_date.len());
    for (date, value) in by_date {
        let entries: Vec<RawEntry> = serde_json::from_value(value.clone())?;
        groups.push(FeedGroup {
            date: date.clone(),
            objects: entries.into_iter().map(object_from_raw).collect(),
        });
    }

    Ok(FeedSnapshot {
        fetched_at: Utc::now(),
        groups,
    })
}

fn object_from_raw(raw: RawEntry) -> NearEarthObject {
    let max_size_km = raw
        .estimated_diameter
        .and_then(|diameter| diameter.kilometers)
        .and_then(|kilometers| kilometers.estimated_diameter_max)
        .unwrap_or(MISSING_SIZE_KM);

    NearEarthObject {
        name: raw.name.unwrap_or_else(|| FALLBACK_NAME.to_string()),
        is_hazardous: raw.is_potentially_hazardous_asteroid.unwrap_or(false),
        max_size_km,
    }
}
