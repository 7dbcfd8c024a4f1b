use std::fmt::Display;

use geo::Coord;
use serde::{Deserialize, Serialize};

/// a WGS84 position stored in GeoJSON order, `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// creates a coordinate, rejecting values outside of the WGS84 range.
    pub fn new(lon: f64, lat: f64) -> Result<Coordinate, String> {
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {lon} outside of [-180, 180]"));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} outside of [-90, 90]"));
        }
        Ok(Coordinate { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = String;

    /// GeoJSON positions may carry an altitude as a third value, which is ignored.
    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value[..] {
            [lon, lat, ..] => Coordinate::new(lon, lat),
            _ => Err(format!(
                "expected [lon, lat] position, found {} value(s)",
                value.len()
            )),
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lon, value.lat]
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}
