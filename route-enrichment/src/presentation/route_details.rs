use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::MetadataReport;
use crate::{
    model::{RouteId, RouteMetadataSummary, RouteRecord},
    service::overpass,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// a stored record prepared for display. the metadata summary is rebuilt
/// from the stored raw payload, so it reflects the current reduction rules.
#[derive(Debug, Clone)]
pub struct RouteDetails {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    pub stored_on: DateTime<Utc>,
    pub distance_km: Option<f64>,
    pub duration_minutes: Option<f64>,
    pub summary: Option<RouteMetadataSummary>,
    pub raw_metadata: Value,
}

impl From<&RouteRecord> for RouteDetails {
    fn from(record: &RouteRecord) -> Self {
        let primary = record.primary_candidate();
        let summary = match overpass::summarize_raw(&record.raw_metadata) {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::warn!("stored metadata for route {} not summarized: {e}", record.id);
                None
            }
        };
        RouteDetails {
            id: record.id,
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            stored_on: record.timestamp,
            distance_km: primary.map(|c| c.distance_meters() / 1000.0),
            duration_minutes: primary.map(|c| c.duration_seconds() / 60.0),
            summary,
            raw_metadata: record.raw_metadata.clone(),
        }
    }
}

impl Display for RouteDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Route Information (id {})", self.id)?;
        writeln!(f, "  Origin: {}", self.origin)?;
        writeln!(f, "  Destination: {}", self.destination)?;
        writeln!(f, "  Stored On: {}", self.stored_on.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Route Metrics")?;
        match self.distance_km {
            Some(km) => writeln!(f, "  Distance: {km:.2} km")?,
            None => writeln!(f, "  Distance: {}", super::NOT_AVAILABLE)?,
        }
        match self.duration_minutes {
            Some(min) => writeln!(f, "  Duration: {min:.2} minutes")?,
            None => writeln!(f, "  Duration: {}", super::NOT_AVAILABLE)?,
        }
        match &self.summary {
            Some(summary) => write!(f, "{}", MetadataReport::new(summary, &self.raw_metadata)),
            None => write!(f, "{}", super::NO_DETAILS_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> RouteRecord {
        serde_json::from_value(json!({
            "id": 4,
            "origin": "London",
            "destination": "Paris",
            "mapbox_route_data": [{
                "geometry": {"type": "LineString", "coordinates": [[-0.12, 51.5], [2.35, 48.85]]},
                "distance": 344123.0,
                "duration": 20940.0
            }],
            "overpass_data": {"elements": [
                {"type": "way", "tags": {"highway": "primary", "maxspeed": "50", "lanes": "2", "name": "Strand"}}
            ]},
            "timestamp": "2024-11-02T14:05:09.123456"
        }))
        .unwrap()
    }

    #[test]
    fn metrics_from_first_candidate() {
        let details = RouteDetails::from(&record());
        assert_eq!(details.distance_km, Some(344.123));
        assert_eq!(details.duration_minutes, Some(349.0));
        let text = details.to_string();
        assert!(text.contains("Distance: 344.12 km"));
        assert!(text.contains("Duration: 349.00 minutes"));
        assert!(text.contains("Stored On: 2024-11-02 14:05:09 UTC"));
        assert!(text.contains("Road Names: Strand"));
    }

    #[test]
    fn summary_rebuilt_from_raw() {
        let details = RouteDetails::from(&record());
        let summary = details.summary.unwrap();
        assert_eq!(summary.max_speeds, vec![50]);
        assert_eq!(summary.total_lanes, 2);
    }
}
