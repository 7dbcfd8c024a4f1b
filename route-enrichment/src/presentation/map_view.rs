use geo::{BoundingRect, Coord, LineString, Rect};

use crate::model::{Coordinate, RouteCandidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: Coordinate,
    pub label: String,
    pub color: MarkerColor,
}

/// everything a map widget needs to draw a route: the line, start and end
/// markers, and the extent to fit the viewport to.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub route: LineString<f64>,
    pub start: MapMarker,
    pub end: MapMarker,
    pub bounds: Rect<f64>,
}

impl MapView {
    pub fn new(candidate: &RouteCandidate, origin: &str, destination: &str) -> Result<MapView, String> {
        let (first, last) = match (candidate.origin(), candidate.destination()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(String::from("cannot draw a route without coordinates")),
        };
        let route: LineString<f64> = candidate
            .coordinates()
            .iter()
            .map(|c| Coord::from(*c))
            .collect();
        let bounds = route
            .bounding_rect()
            .ok_or_else(|| String::from("route has no extent"))?;
        Ok(MapView {
            route,
            start: MapMarker {
                position: first,
                label: format!("Start: {origin}"),
                color: MarkerColor::Green,
            },
            end: MapMarker {
                position: last,
                label: format!("End: {destination}"),
                color: MarkerColor::Red,
            },
            bounds,
        })
    }
}
