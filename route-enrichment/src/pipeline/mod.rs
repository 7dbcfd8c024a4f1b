mod enrichment_pipeline;
mod pipeline_state;
mod search_request;
mod session_cache;
mod status;

pub use enrichment_pipeline::{EnrichedRoute, RouteEnrichmentPipeline, StorageOutcome};
pub use pipeline_state::PipelineState;
pub use search_request::{SearchRequest, MISSING_INPUT_MESSAGE};
pub use session_cache::{SessionCache, OVERPASS_ROUTE_DATA_KEY};
pub use status::{
    LogStatusObserver, RecordingStatusObserver, StatusLevel, StatusNotification, StatusObserver,
    DONE_MESSAGE, FETCHING_DETAILS_MESSAGE, SEARCHING_MESSAGE,
};
