mod route_enrichment_app;

pub use route_enrichment_app::{RouteEnrichmentApp, RouteEnrichmentOperation};
