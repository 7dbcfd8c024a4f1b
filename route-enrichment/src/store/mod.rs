mod http_route_store;
mod route_store;

pub use http_route_store::{
    decode_route_lookup, resolve_saved, HttpRouteStore, RouteListing, StoreAcknowledgement,
    GET_ROUTE_PATH, LIST_ROUTES_PATH, STORE_ROUTE_PATH,
};
pub use route_store::{RouteStore, SavedRoute};
