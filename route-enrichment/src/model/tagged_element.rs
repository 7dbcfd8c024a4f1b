use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OSM element type as reported by Overpass in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Way,
    Node,
    #[serde(other)]
    Other,
}

/// a single Overpass element. geometry fields are ignored here; the raw
/// payload is kept separately for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl TaggedElement {
    pub fn new(kind: ElementKind, tags: &[(&str, &str)]) -> TaggedElement {
        TaggedElement {
            kind,
            tags: tags
                .iter()
                .map(|(k, v)| (String::from(*k), String::from(*v)))
                .collect(),
        }
    }

    /// returns the tag value if present and non-empty.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<TaggedElement>,
}

impl TryFrom<&Value> for OverpassResponse {
    type Error = String;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(String::from("overpass response is not a JSON object"));
        }
        OverpassResponse::deserialize(value)
            .map_err(|e| format!("failure decoding overpass elements: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_ways_nodes_and_skeleton_entries() {
        let raw = json!({
            "version": 0.6,
            "elements": [
                {"type": "way", "id": 1, "nodes": [10, 11], "tags": {"highway": "primary"}},
                {"type": "node", "id": 10, "lat": 51.5, "lon": -0.12},
                {"type": "relation", "id": 7, "members": []}
            ]
        });
        let response = OverpassResponse::try_from(&raw).unwrap();
        assert_eq!(response.elements.len(), 3);
        assert_eq!(response.elements[0].kind, ElementKind::Way);
        assert_eq!(response.elements[0].tag("highway"), Some("primary"));
        assert!(response.elements[1].tags.is_empty());
        assert_eq!(response.elements[2].kind, ElementKind::Other);
    }

    #[test]
    fn missing_elements_is_empty() {
        let response = OverpassResponse::try_from(&json!({"remark": "runtime error"})).unwrap();
        assert!(response.elements.is_empty());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(OverpassResponse::try_from(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn empty_tag_value_is_absent() {
        let e = TaggedElement::new(ElementKind::Way, &[("name", "")]);
        assert_eq!(e.tag("name"), None);
    }
}
