use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::RouteCandidate;

/// identifier assigned by the route store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub i64);

impl Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RouteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(RouteId)
            .map_err(|e| format!("route id '{s}' is not an integer: {e}"))
    }
}

/// the write payload for a route that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRouteRecord {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "mapbox_route_data")]
    pub route_candidates: Vec<RouteCandidate>,
    #[serde(rename = "overpass_data")]
    pub raw_metadata: Value,
}

/// a route record owned by the store, with its backend-assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "mapbox_route_data")]
    pub route_candidates: Vec<RouteCandidate>,
    #[serde(rename = "overpass_data")]
    pub raw_metadata: Value,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl RouteRecord {
    /// the candidate the pipeline displayed and summarized.
    pub fn primary_candidate(&self) -> Option<&RouteCandidate> {
        self.route_candidates.first()
    }
}

/// list-view projection of a [`RouteRecord`]. other fields in the listing
/// payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecordSummary {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl From<&RouteRecord> for RouteRecordSummary {
    fn from(value: &RouteRecord) -> Self {
        RouteRecordSummary {
            id: value.id,
            origin: value.origin.clone(),
            destination: value.destination.clone(),
            timestamp: value.timestamp,
        }
    }
}

/// parses an ISO-8601 timestamp. values without an offset (as written by
/// `datetime.isoformat()` on a naive UTC datetime) are read as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp '{s}': {e}"))
}

fn deserialize_timestamp<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    parse_timestamp(&s).map_err(de::Error::custom)
}
