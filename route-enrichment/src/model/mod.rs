mod coordinate;
mod metadata_summary;
mod route_candidate;
mod route_error;
mod route_record;
mod tagged_element;

pub use coordinate::Coordinate;
pub use metadata_summary::RouteMetadataSummary;
pub use route_candidate::{RouteCandidate, RouteGeometry};
pub use route_error::{ErrorKind, RouteError, ServiceName};
pub use route_record::{parse_timestamp, NewRouteRecord, RouteId, RouteRecord, RouteRecordSummary};
pub use tagged_element::{ElementKind, OverpassResponse, TaggedElement};
