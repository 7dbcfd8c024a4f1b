use std::future::Future;

use crate::model::{NewRouteRecord, RouteError, RouteId, RouteRecord, RouteRecordSummary};

/// a write the backend accepted. `Acknowledged` means the id was assigned
/// but the stored record could not be read back.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedRoute {
    Record(RouteRecord),
    Acknowledged(RouteId),
}

impl SavedRoute {
    pub fn id(&self) -> RouteId {
        match self {
            SavedRoute::Record(record) => record.id,
            SavedRoute::Acknowledged(id) => *id,
        }
    }

    pub fn record(&self) -> Option<&RouteRecord> {
        match self {
            SavedRoute::Record(record) => Some(record),
            SavedRoute::Acknowledged(_) => None,
        }
    }
}

/// client side of the route persistence backend. implementations do not
/// cache; every call is a fresh round trip.
pub trait RouteStore: Send + Sync {
    /// stores a new record. an error means the backend did not accept the
    /// write; once it has, the result is always a [`SavedRoute`].
    fn save(&self, record: &NewRouteRecord) -> impl Future<Output = Result<SavedRoute, RouteError>> + Send;

    /// lists stored routes in backend order. an empty list is a normal result.
    fn list_all(&self) -> impl Future<Output = Result<Vec<RouteRecordSummary>, RouteError>> + Send;

    /// fetches the full record, or [`RouteError::RouteNotFound`].
    fn get_by_id(&self, id: RouteId) -> impl Future<Output = Result<RouteRecord, RouteError>> + Send;
}
