use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{RouteStore, SavedRoute};
use crate::{
    model::{NewRouteRecord, RouteError, RouteId, RouteRecord, RouteRecordSummary, ServiceName},
    service::http_ops,
};

pub const STORE_ROUTE_PATH: &str = "store_route_data";
pub const LIST_ROUTES_PATH: &str = "get_all_routes";
pub const GET_ROUTE_PATH: &str = "get_route";

/// REST adapter for the route data backend.
#[derive(Debug, Clone)]
pub struct HttpRouteStore {
    client: Client,
    base_url: String,
}

impl HttpRouteStore {
    pub fn new(client: Client, base_url: &str) -> HttpRouteStore {
        HttpRouteStore {
            client,
            base_url: String::from(base_url),
        }
    }
}

/// acknowledgement body of a successful write.
#[derive(Debug, Deserialize)]
pub struct StoreAcknowledgement {
    pub route_id: RouteId,
    #[serde(default)]
    pub message: Option<String>,
}

/// the listing endpoint wraps records in an envelope; a bare array is
/// accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RouteListing {
    Envelope {
        #[serde(default)]
        total_routes: Option<usize>,
        routes: Vec<RouteRecordSummary>,
    },
    Bare(Vec<RouteRecordSummary>),
}

impl RouteListing {
    pub fn into_routes(self) -> Vec<RouteRecordSummary> {
        match self {
            RouteListing::Envelope {
                total_routes,
                routes,
            } => {
                if let Some(total) = total_routes {
                    if total != routes.len() {
                        log::warn!(
                            "route listing reports {total} routes but contains {}",
                            routes.len()
                        );
                    }
                }
                routes
            }
            RouteListing::Bare(routes) => routes,
        }
    }
}

/// the backend answers a missing id with HTTP 500 and an `error` text that
/// starts with the 404 status line.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn is_wrapped_not_found(body: &str) -> bool {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .is_some_and(|e| e.trim_start().starts_with("404"))
}

/// maps a `get_route/{id}` response to a record. both a plain 404 and the
/// backend's wrapped 404 become [`RouteError::RouteNotFound`].
pub fn decode_route_lookup(
    id: RouteId,
    status: StatusCode,
    body: &str,
) -> Result<RouteRecord, RouteError> {
    if status == StatusCode::NOT_FOUND
        || (status.is_server_error() && is_wrapped_not_found(body))
    {
        return Err(RouteError::RouteNotFound(id));
    }
    if !status.is_success() {
        log::warn!("route store returned HTTP {status} for route {id}");
        return Err(http_ops::status_error(status, ServiceName::StoreRead));
    }
    serde_json::from_str(body).map_err(|e| {
        RouteError::service(
            ServiceName::StoreRead,
            format!("unparseable record for route {id}: {e}"),
        )
    })
}

/// the write already succeeded, so a failed read-back only loses the
/// server-side timestamp.
pub fn resolve_saved(route_id: RouteId, read_back: Result<RouteRecord, RouteError>) -> SavedRoute {
    match read_back {
        Ok(record) => SavedRoute::Record(record),
        Err(e) => {
            log::warn!("route {route_id} was stored but could not be read back: {e}");
            SavedRoute::Acknowledged(route_id)
        }
    }
}

impl RouteStore for HttpRouteStore {
    async fn save(&self, record: &NewRouteRecord) -> Result<SavedRoute, RouteError> {
        let url =
            http_ops::join_segments(&self.base_url, &[STORE_ROUTE_PATH], ServiceName::StoreWrite)?;
        log::debug!(
            "storing route '{}' -> '{}' with {} candidate(s)",
            record.origin,
            record.destination,
            record.route_candidates.len()
        );
        let ack: StoreAcknowledgement =
            http_ops::fetch_json(self.client.post(url).json(record), ServiceName::StoreWrite)
                .await?;
        log::info!(
            "stored route {} ({})",
            ack.route_id,
            ack.message.as_deref().unwrap_or("no message")
        );
        // the write response carries only the id; read back the canonical record
        let read_back = self.get_by_id(ack.route_id).await;
        Ok(resolve_saved(ack.route_id, read_back))
    }

    async fn list_all(&self) -> Result<Vec<RouteRecordSummary>, RouteError> {
        let url =
            http_ops::join_segments(&self.base_url, &[LIST_ROUTES_PATH], ServiceName::StoreList)?;
        let listing: RouteListing =
            http_ops::fetch_json(self.client.get(url), ServiceName::StoreList).await?;
        let routes = listing.into_routes();
        log::debug!("listed {} stored route(s)", routes.len());
        Ok(routes)
    }

    async fn get_by_id(&self, id: RouteId) -> Result<RouteRecord, RouteError> {
        let id_segment = id.to_string();
        let url = http_ops::join_segments(
            &self.base_url,
            &[GET_ROUTE_PATH, id_segment.as_str()],
            ServiceName::StoreRead,
        )?;
        let response = http_ops::send(self.client.get(url), ServiceName::StoreRead).await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            RouteError::service(
                ServiceName::StoreRead,
                format!("failure reading response: {}", e.without_url()),
            )
        })?;
        decode_route_lookup(id, status, &body)
    }
}
