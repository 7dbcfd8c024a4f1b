use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// best-effort road characteristics derived from tagged Overpass ways.
/// sets keep first-encounter order so repeated reductions display identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMetadataSummary {
    pub highway_types: IndexSet<String>,
    pub surfaces: IndexSet<String>,
    /// one entry per way with a parseable `maxspeed`, in encounter order.
    pub max_speeds: Vec<i64>,
    pub total_lanes: i64,
    pub road_names: IndexSet<String>,
}

impl RouteMetadataSummary {
    pub fn is_empty(&self) -> bool {
        self.highway_types.is_empty()
            && self.surfaces.is_empty()
            && self.max_speeds.is_empty()
            && self.total_lanes == 0
            && self.road_names.is_empty()
    }
}
