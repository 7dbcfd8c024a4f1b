mod geocoder;
mod router;

pub mod http_ops;
pub mod overpass;

pub use geocoder::{first_candidate, geocoding_url, Geocoder, GeocodingResponse, MapboxGeocoder};
pub use router::{directions_url, route_candidates, DirectionsResponse, MapboxRouter, Router};
