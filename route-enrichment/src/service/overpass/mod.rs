mod metadata_aggregator;
mod overpass_client;
mod overpass_query;

pub mod tag_ops;

pub use metadata_aggregator::{
    sample_point, summarize_raw, MetadataAggregator, DEFAULT_SAMPLE_RADIUS_METERS,
};
pub use overpass_client::{interpreter_url, MetadataSource, OverpassClient};
pub use overpass_query::{AroundQuery, TagClause};
