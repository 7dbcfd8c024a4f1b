use std::future::Future;

use reqwest::{Client, Url};
use serde::Deserialize;

use super::http_ops;
use crate::model::{Coordinate, RouteCandidate, RouteError, ServiceName};

const NO_ROUTE_CODE: &str = "NoRoute";
const OK_CODE: &str = "Ok";

/// computes driving routes between two coordinates.
pub trait Router: Send + Sync {
    /// returns every candidate in the service's ranking, best first.
    /// never returns an empty list; that case is [`RouteError::NoRoute`].
    fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<Vec<RouteCandidate>, RouteError>> + Send;
}

/// Mapbox Directions adapter requesting full-resolution GeoJSON geometry.
#[derive(Debug, Clone)]
pub struct MapboxRouter {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MapboxRouter {
    pub fn new(client: Client, base_url: &str, access_token: &str) -> MapboxRouter {
        MapboxRouter {
            client,
            base_url: String::from(base_url),
            access_token: String::from(access_token),
        }
    }
}

impl Router for MapboxRouter {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<RouteCandidate>, RouteError> {
        let url = directions_url(&self.base_url, &origin, &destination, &self.access_token)?;
        log::debug!("requesting route {origin} -> {destination}");
        let response: DirectionsResponse =
            http_ops::fetch_json(self.client.get(url), ServiceName::Routing).await?;
        let candidates = route_candidates(response)?;
        log::info!(
            "routing returned {} candidate(s), first is {:.0}m",
            candidates.len(),
            candidates[0].distance_meters()
        );
        Ok(candidates)
    }
}

/// `{base}/{lon},{lat};{lon},{lat}?access_token=...&overview=full&geometries=geojson`
pub fn directions_url(
    base: &str,
    origin: &Coordinate,
    destination: &Coordinate,
    access_token: &str,
) -> Result<Url, RouteError> {
    let segment = format!("{origin};{destination}");
    let mut url = http_ops::join_segments(base, &[segment.as_str()], ServiceName::Routing)?;
    url.query_pairs_mut()
        .append_pair("access_token", access_token)
        .append_pair("overview", "full")
        .append_pair("geometries", "geojson");
    Ok(url)
}

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    code: Option<String>,
    message: Option<String>,
    routes: Option<Vec<RouteCandidate>>,
}

/// validates the decoded candidates. the ranking is preserved as returned.
pub fn route_candidates(response: DirectionsResponse) -> Result<Vec<RouteCandidate>, RouteError> {
    let detail = response
        .message
        .clone()
        .unwrap_or_else(|| String::from("routing service returned no routes"));
    match response.code.as_deref() {
        Some(NO_ROUTE_CODE) => return Err(RouteError::NoRoute(detail)),
        Some(OK_CODE) | None => {}
        Some(other) => {
            return Err(RouteError::service(
                ServiceName::Routing,
                format!("{other}: {detail}"),
            ))
        }
    }
    let routes = response.routes.ok_or_else(|| {
        RouteError::service(ServiceName::Routing, "response is missing the 'routes' list")
    })?;
    if routes.is_empty() {
        return Err(RouteError::NoRoute(detail));
    }
    for (idx, route) in routes.iter().enumerate() {
        route.validate().map_err(|e| {
            RouteError::service(ServiceName::Routing, format!("route {idx} is malformed: {e}"))
        })?;
    }
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorKind;
    use serde_json::json;

    fn decode(v: serde_json::Value) -> DirectionsResponse {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn url_has_coordinates_and_options() {
        let o = Coordinate::new(-0.1276, 51.5072).unwrap();
        let d = Coordinate::new(2.3522, 48.8566).unwrap();
        let url = directions_url(
            "https://api.mapbox.com/directions/v5/mapbox/driving",
            &o,
            &d,
            "tok",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.mapbox.com/directions/v5/mapbox/driving/-0.1276,51.5072;2.3522,48.8566?access_token=tok&overview=full&geometries=geojson"
        );
    }

    #[test]
    fn keeps_ranking() {
        let response = decode(json!({
            "code": "Ok",
            "routes": [
                {"geometry": {"coordinates": [[-0.12, 51.5], [1.0, 50.0], [2.35, 48.85]]}, "distance": 344000.0, "duration": 21000.0},
                {"geometry": {"coordinates": [[-0.12, 51.5], [2.35, 48.85]]}, "distance": 380000.0, "duration": 24000.0}
            ]
        }));
        let routes = route_candidates(response).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].distance_meters(), 344000.0);
        assert_eq!(routes[0].coordinates().len(), 3);
    }

    #[test]
    fn empty_routes_is_no_route() {
        let result = route_candidates(decode(json!({"code": "Ok", "routes": []})));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NoRoute);
        let result = route_candidates(decode(json!({"code": "NoRoute", "message": "Impossible route"})));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NoRoute);
    }

    #[test]
    fn malformed_routes_are_service_errors() {
        let missing = route_candidates(decode(json!({"code": "Ok"})));
        assert_eq!(missing.unwrap_err().kind(), ErrorKind::Service);
        let short = route_candidates(decode(json!({
            "routes": [{"geometry": {"coordinates": [[0.0, 0.0]]}, "distance": 0.0, "duration": 0.0}]
        })));
        assert_eq!(short.unwrap_err().kind(), ErrorKind::Service);
        let invalid_input = route_candidates(decode(json!({"code": "InvalidInput", "message": "bad"})));
        assert_eq!(invalid_input.unwrap_err().kind(), ErrorKind::Service);
    }
}
