use std::fmt::Display;

use itertools::Itertools;
use serde_json::Value;

use crate::model::RouteMetadataSummary;

pub const NOT_AVAILABLE: &str = "Not Available";
pub const NO_DETAILS_MESSAGE: &str = "No detailed route information available.";

/// text rendering of a metadata summary. `has_elements` is false when the
/// raw payload carried no elements at all.
#[derive(Debug, Clone)]
pub struct MetadataReport<'a> {
    pub summary: &'a RouteMetadataSummary,
    pub has_elements: bool,
}

impl<'a> MetadataReport<'a> {
    pub fn new(summary: &'a RouteMetadataSummary, raw: &Value) -> MetadataReport<'a> {
        let has_elements = raw
            .get("elements")
            .and_then(Value::as_array)
            .is_some_and(|elements| !elements.is_empty());
        MetadataReport {
            summary,
            has_elements,
        }
    }
}

fn or_not_available(s: String) -> String {
    if s.is_empty() {
        String::from(NOT_AVAILABLE)
    } else {
        s
    }
}

impl Display for MetadataReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.has_elements {
            return write!(f, "{NO_DETAILS_MESSAGE}");
        }
        let s = self.summary;
        let max_speeds = if s.max_speeds.is_empty() {
            String::new()
        } else {
            format!("{} km/h", s.max_speeds.iter().join(" km/h, "))
        };
        let total_lanes = if s.total_lanes == 0 {
            String::new()
        } else {
            s.total_lanes.to_string()
        };
        writeln!(f, "Route Characteristics")?;
        writeln!(f, "  Highway Types: {}", or_not_available(s.highway_types.iter().join(", ")))?;
        writeln!(f, "  Road Surfaces: {}", or_not_available(s.surfaces.iter().join(", ")))?;
        writeln!(f, "  Max Speeds: {}", or_not_available(max_speeds))?;
        writeln!(f, "  Total Lanes: {}", or_not_available(total_lanes))?;
        write!(f, "  Road Names: {}", or_not_available(s.road_names.iter().join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_message() {
        let summary = RouteMetadataSummary::default();
        let report = MetadataReport::new(&summary, &json!({"elements": []}));
        assert_eq!(report.to_string(), NO_DETAILS_MESSAGE);
    }

    #[test]
    fn renders_fields_with_fallbacks() {
        let mut summary = RouteMetadataSummary::default();
        summary.highway_types.insert(String::from("primary"));
        summary.highway_types.insert(String::from("residential"));
        summary.max_speeds = vec![50, 30];
        let report = MetadataReport::new(&summary, &json!({"elements": [{"type": "node"}]}));
        let text = report.to_string();
        assert!(text.contains("Highway Types: primary, residential"));
        assert!(text.contains("Max Speeds: 50 km/h, 30 km/h"));
        assert!(text.contains("Total Lanes: Not Available"));
        assert!(text.contains("Road Surfaces: Not Available"));
    }
}
