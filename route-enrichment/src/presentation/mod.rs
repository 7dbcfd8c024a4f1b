mod map_view;
mod metadata_report;
mod route_details;
mod route_listing;

pub use map_view::{MapMarker, MapView, MarkerColor};
pub use metadata_report::{MetadataReport, NOT_AVAILABLE, NO_DETAILS_MESSAGE};
pub use route_details::{RouteDetails, TIMESTAMP_FORMAT};
pub use route_listing::{RouteListingView, NO_STORED_ROUTES_MESSAGE};
