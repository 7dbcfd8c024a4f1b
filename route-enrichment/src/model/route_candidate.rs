use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Coordinate;

/// one path returned by the routing service. fields the crate does not
/// interpret (legs, weight, waypoints, ...) are retained in `extra` so the
/// candidate serializes back to the provider's full representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    geometry: RouteGeometry,
    distance: f64,
    duration: f64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    coordinates: Vec<Coordinate>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RouteCandidate {
    pub fn new(
        coordinates: Vec<Coordinate>,
        distance_meters: f64,
        duration_seconds: f64,
    ) -> Result<RouteCandidate, String> {
        let mut geometry_extra = Map::new();
        geometry_extra.insert(String::from("type"), Value::from("LineString"));
        let candidate = RouteCandidate {
            geometry: RouteGeometry {
                coordinates,
                extra: geometry_extra,
            },
            distance: distance_meters,
            duration: duration_seconds,
            extra: Map::new(),
        };
        candidate.validate()?;
        Ok(candidate)
    }

    /// confirms the path has at least two positions and non-negative costs.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.geometry.coordinates.len();
        if n < 2 {
            return Err(format!(
                "route geometry must have at least 2 coordinates, found {n}"
            ));
        }
        if !(self.distance >= 0.0) {
            return Err(format!("route distance {} is negative", self.distance));
        }
        if !(self.duration >= 0.0) {
            return Err(format!("route duration {} is negative", self.duration));
        }
        Ok(())
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.geometry.coordinates
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration
    }

    pub fn origin(&self) -> Option<&Coordinate> {
        self.geometry.coordinates.first()
    }

    pub fn destination(&self) -> Option<&Coordinate> {
        self.geometry.coordinates.last()
    }
}
