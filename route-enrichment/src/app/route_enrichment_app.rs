use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{
    config::RouteEnrichmentConfig,
    model::{RouteError, RouteId},
    pipeline::{EnrichedRoute, LogStatusObserver, RouteEnrichmentPipeline, StorageOutcome},
    presentation::{MetadataReport, RouteDetails, RouteListingView},
    service::{
        http_ops,
        overpass::{MetadataAggregator, OverpassClient},
        MapboxGeocoder, MapboxRouter,
    },
    store::{HttpRouteStore, RouteStore},
};

/// command line tool that geocodes, routes, and enriches driving routes with
/// OpenStreetMap road metadata, storing each result in the route backend.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouteEnrichmentApp {
    /// path to a .toml or .json file overriding the default configuration
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: RouteEnrichmentOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RouteEnrichmentOperation {
    /// find, enrich, and store a route between two place names
    Search {
        /// free-text origin, such as "London"
        #[arg(short, long)]
        origin: String,
        /// free-text destination, such as "Paris"
        #[arg(short, long)]
        destination: String,
    },
    /// list stored routes, most recent first
    List,
    /// show one stored route
    Show {
        /// stored route id
        #[arg(long)]
        id: RouteId,
    },
}

impl RouteEnrichmentApp {
    pub fn run(&self) -> Result<(), RouteError> {
        let conf = RouteEnrichmentConfig::load(self.config_file.as_deref())?;
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            RouteError::ConfigurationError(format!("failure starting async runtime: {e}"))
        })?;
        runtime.block_on(self.op.run(&conf))
    }
}

impl RouteEnrichmentOperation {
    pub async fn run(&self, conf: &RouteEnrichmentConfig) -> Result<(), RouteError> {
        let client = http_ops::build_client(conf.request_timeout_seconds)?;
        let store = HttpRouteStore::new(client.clone(), &conf.store_url);
        match self {
            RouteEnrichmentOperation::Search {
                origin,
                destination,
            } => {
                conf.validate()?;
                let pipeline = RouteEnrichmentPipeline::new(
                    MapboxGeocoder::new(client.clone(), &conf.geocoding_url, &conf.access_token),
                    MapboxRouter::new(client.clone(), &conf.directions_url, &conf.access_token),
                    MetadataAggregator::new(
                        OverpassClient::new(client, &conf.overpass_url),
                        conf.sample_radius_meters,
                    ),
                    store,
                    conf.parallel_geocoding,
                );
                let result = pipeline
                    .search_places(origin, destination, &LogStatusObserver)
                    .await?;
                print_enriched_route(&result);
                match result.storage {
                    StorageOutcome::Stored(_) => Ok(()),
                    StorageOutcome::Failed(e) => Err(e),
                }
            }
            RouteEnrichmentOperation::List => {
                let routes = store.list_all().await?;
                println!("{}", RouteListingView(&routes));
                Ok(())
            }
            RouteEnrichmentOperation::Show { id } => {
                let record = store.get_by_id(*id).await?;
                println!("{}", RouteDetails::from(&record));
                Ok(())
            }
        }
    }
}

fn print_enriched_route(result: &EnrichedRoute) {
    let primary = result.primary_candidate();
    let view = &result.map_view;
    println!("Route from {} to {}", result.origin, result.destination);
    println!(
        "  Distance: {:.2} km, Duration: {:.1} minutes",
        primary.distance_meters() / 1000.0,
        primary.duration_seconds() / 60.0
    );
    println!(
        "  {} ({}) -> {} ({})",
        view.start.label, view.start.position, view.end.label, view.end.position
    );
    println!(
        "  Bounds: [{:.5}, {:.5}] - [{:.5}, {:.5}], {} route point(s)",
        view.bounds.min().x,
        view.bounds.min().y,
        view.bounds.max().x,
        view.bounds.max().y,
        view.route.0.len()
    );
    if result.candidates.len() > 1 {
        println!(
            "  {} alternative route(s) returned, showing the first",
            result.candidates.len() - 1
        );
    }
    println!("{}", MetadataReport::new(&result.summary, &result.raw_metadata));
    if let Some(id) = result.storage.route_id() {
        println!("Stored as route {id}");
    }
}
