mod route_enrichment_config;

pub use route_enrichment_config::{RouteEnrichmentConfig, ENV_PREFIX};
