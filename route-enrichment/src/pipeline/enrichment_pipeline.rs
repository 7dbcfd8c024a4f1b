use serde_json::Value;

use super::{
    PipelineState, SearchRequest, SessionCache, StatusNotification, StatusObserver,
};
use crate::{
    model::{
        Coordinate, NewRouteRecord, RouteCandidate, RouteError, RouteId, RouteMetadataSummary,
        RouteRecord,
    },
    presentation::MapView,
    service::{
        overpass::{MetadataAggregator, MetadataSource},
        Geocoder, Router,
    },
    store::{RouteStore, SavedRoute},
};

/// result of the persistence stage. a failed write does not invalidate the
/// route and metadata already produced.
#[derive(Debug)]
pub enum StorageOutcome {
    Stored(SavedRoute),
    Failed(RouteError),
}

impl StorageOutcome {
    pub fn record(&self) -> Option<&RouteRecord> {
        match self {
            StorageOutcome::Stored(saved) => saved.record(),
            StorageOutcome::Failed(_) => None,
        }
    }

    pub fn route_id(&self) -> Option<RouteId> {
        match self {
            StorageOutcome::Stored(saved) => Some(saved.id()),
            StorageOutcome::Failed(_) => None,
        }
    }
}

/// everything one successful run produced, handed to the presentation layer.
#[derive(Debug)]
pub struct EnrichedRoute {
    pub origin: String,
    pub destination: String,
    /// full ranking from the routing service; only the first entry was used.
    pub candidates: Vec<RouteCandidate>,
    pub map_view: MapView,
    pub summary: RouteMetadataSummary,
    pub raw_metadata: Value,
    pub storage: StorageOutcome,
    pub final_state: PipelineState,
}

impl EnrichedRoute {
    pub fn primary_candidate(&self) -> &RouteCandidate {
        &self.candidates[0]
    }
}

/// tracks the state of a single run and reports each transition.
struct PipelineRun<'a> {
    state: PipelineState,
    observer: &'a dyn StatusObserver,
}

impl<'a> PipelineRun<'a> {
    fn new(observer: &'a dyn StatusObserver) -> PipelineRun<'a> {
        PipelineRun {
            state: PipelineState::Idle,
            observer,
        }
    }

    fn advance(&mut self, next: PipelineState) {
        if !self.state.can_transition_to(next) {
            log::error!("internal error: illegal pipeline transition {} -> {next}", self.state);
        }
        log::debug!("pipeline {} -> {next}", self.state);
        self.state = next;
        if let Some(notification) = StatusNotification::on_enter(next) {
            self.observer.notify(&notification);
        }
    }

    fn fail(&mut self, error: RouteError) -> RouteError {
        log::error!("route search failed while {}: {error}", self.state);
        self.advance(PipelineState::Failed);
        self.observer
            .notify(&StatusNotification::failure(error.user_message()));
        error
    }
}

/// geocode -> route -> aggregate -> persist, strictly fail-fast.
pub struct RouteEnrichmentPipeline<G, R, M, S> {
    geocoder: G,
    router: R,
    aggregator: MetadataAggregator<M>,
    store: S,
    cache: SessionCache,
    parallel_geocoding: bool,
}

impl<G, R, M, S> RouteEnrichmentPipeline<G, R, M, S>
where
    G: Geocoder,
    R: Router,
    M: MetadataSource,
    S: RouteStore,
{
    pub fn new(
        geocoder: G,
        router: R,
        aggregator: MetadataAggregator<M>,
        store: S,
        parallel_geocoding: bool,
    ) -> RouteEnrichmentPipeline<G, R, M, S> {
        RouteEnrichmentPipeline {
            geocoder,
            router,
            aggregator,
            store,
            cache: SessionCache::default(),
            parallel_geocoding,
        }
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// validates raw input and runs the pipeline. blank input fails with
    /// [`RouteError::ValidationError`] before any stage starts.
    pub async fn search_places(
        &self,
        origin: &str,
        destination: &str,
        observer: &dyn StatusObserver,
    ) -> Result<EnrichedRoute, RouteError> {
        let request = SearchRequest::new(origin, destination)?;
        self.search(&request, observer).await
    }

    /// runs every stage in order. a geocoding, routing, or aggregation
    /// failure ends the run with that error and nothing is stored. a storage
    /// failure is returned inside [`EnrichedRoute::storage`].
    pub async fn search(
        &self,
        request: &SearchRequest,
        observer: &dyn StatusObserver,
    ) -> Result<EnrichedRoute, RouteError> {
        let mut run = PipelineRun::new(observer);

        run.advance(PipelineState::Geocoding);
        let (origin, destination) = match self.geocode_endpoints(request).await {
            Ok(coordinates) => coordinates,
            Err(e) => return Err(run.fail(e)),
        };

        run.advance(PipelineState::Routing);
        let candidates = match self.router.route(origin, destination).await {
            Ok(candidates) if candidates.is_empty() => {
                return Err(run.fail(RouteError::NoRoute(String::from(
                    "routing service returned no routes",
                ))))
            }
            Ok(candidates) => candidates,
            Err(e) => return Err(run.fail(e)),
        };
        let primary = &candidates[0];
        let map_view = match MapView::new(primary, request.origin(), request.destination()) {
            Ok(view) => view,
            Err(e) => return Err(run.fail(RouteError::NoRoute(e))),
        };

        run.advance(PipelineState::Aggregating);
        let (summary, raw_metadata) = match self.aggregator.aggregate(primary.coordinates()).await {
            Ok(result) => result,
            Err(e) => return Err(run.fail(e)),
        };
        self.cache.set_latest_metadata(raw_metadata.clone());

        run.advance(PipelineState::Persisting);
        let new_record = NewRouteRecord {
            origin: String::from(request.origin()),
            destination: String::from(request.destination()),
            route_candidates: candidates.clone(),
            raw_metadata: raw_metadata.clone(),
        };
        let storage = match self.store.save(&new_record).await {
            Ok(saved) => {
                run.advance(PipelineState::Done);
                StorageOutcome::Stored(saved)
            }
            Err(e) => StorageOutcome::Failed(run.fail(e)),
        };

        Ok(EnrichedRoute {
            origin: new_record.origin,
            destination: new_record.destination,
            candidates: new_record.route_candidates,
            map_view,
            summary,
            raw_metadata,
            storage,
            final_state: run.state,
        })
    }

    async fn geocode_endpoints(
        &self,
        request: &SearchRequest,
    ) -> Result<(Coordinate, Coordinate), RouteError> {
        if self.parallel_geocoding {
            tokio::try_join!(
                self.geocoder.geocode(request.origin()),
                self.geocoder.geocode(request.destination())
            )
        } else {
            let origin = self.geocoder.geocode(request.origin()).await?;
            let destination = self.geocoder.geocode(request.destination()).await?;
            Ok((origin, destination))
        }
    }
}
