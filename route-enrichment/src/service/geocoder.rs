use std::future::Future;

use reqwest::{Client, Url};
use serde::Deserialize;

use super::http_ops;
use crate::model::{Coordinate, RouteError, ServiceName};

/// resolves a place name to a single coordinate.
pub trait Geocoder: Send + Sync {
    /// returns the first candidate in the service's ranking. fails with
    /// [`RouteError::NotFound`] when there are no candidates.
    fn geocode(&self, place_name: &str) -> impl Future<Output = Result<Coordinate, RouteError>> + Send;
}

/// Mapbox forward geocoding (`mapbox.places`) adapter.
#[derive(Debug, Clone)]
pub struct MapboxGeocoder {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MapboxGeocoder {
    pub fn new(client: Client, base_url: &str, access_token: &str) -> MapboxGeocoder {
        MapboxGeocoder {
            client,
            base_url: String::from(base_url),
            access_token: String::from(access_token),
        }
    }
}

impl Geocoder for MapboxGeocoder {
    async fn geocode(&self, place_name: &str) -> Result<Coordinate, RouteError> {
        let url = geocoding_url(&self.base_url, place_name, &self.access_token)?;
        log::debug!("geocoding '{place_name}' via {}", http_ops::redact(&url));
        let response: GeocodingResponse =
            http_ops::fetch_json(self.client.get(url), ServiceName::Geocoding).await?;
        let coordinate = first_candidate(response, place_name)?;
        log::info!("geocoded '{place_name}' to {coordinate}");
        Ok(coordinate)
    }
}

/// `{base}/{place}.json?access_token=...`, with the place name as one
/// percent-encoded path segment.
pub fn geocoding_url(base: &str, place_name: &str, access_token: &str) -> Result<Url, RouteError> {
    if place_name.trim().is_empty() {
        return Err(RouteError::ValidationError(String::from(
            "place name must not be empty",
        )));
    }
    let segment = format!("{place_name}.json");
    let mut url = http_ops::join_segments(base, &[segment.as_str()], ServiceName::Geocoding)?;
    url.query_pairs_mut()
        .append_pair("access_token", access_token);
    Ok(url)
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    features: Option<Vec<GeocodingFeature>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingFeature {
    geometry: Option<PointGeometry>,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: Vec<f64>,
}

/// picks the first feature. an empty list is [`RouteError::NotFound`], a
/// missing list or geometry is a malformed payload.
pub fn first_candidate(response: GeocodingResponse, place_name: &str) -> Result<Coordinate, RouteError> {
    let features = response.features.ok_or_else(|| {
        RouteError::service(
            ServiceName::Geocoding,
            "response is missing the 'features' list",
        )
    })?;
    let first = features.into_iter().next().ok_or_else(|| {
        RouteError::NotFound(format!("no coordinates found for '{place_name}'"))
    })?;
    let geometry = first.geometry.ok_or_else(|| {
        RouteError::service(
            ServiceName::Geocoding,
            format!("first candidate for '{place_name}' has no geometry"),
        )
    })?;
    Coordinate::try_from(geometry.coordinates).map_err(|e| {
        RouteError::service(
            ServiceName::Geocoding,
            format!("invalid coordinates for '{place_name}': {e}"),
        )
    })
}
