use serde_json::Value;

use super::{tag_ops, AroundQuery, MetadataSource};
use crate::model::{
    Coordinate, OverpassResponse, RouteError, RouteMetadataSummary, ServiceName,
};

pub const DEFAULT_SAMPLE_RADIUS_METERS: u32 = 1000;

/// samples road metadata near a route and reduces it to a summary.
///
/// only the route's first coordinate is queried. long routes are therefore
/// described by the area around their start.
#[derive(Debug, Clone)]
pub struct MetadataAggregator<M> {
    source: M,
    radius_meters: u32,
}

impl<M: MetadataSource> MetadataAggregator<M> {
    pub fn new(source: M, radius_meters: u32) -> MetadataAggregator<M> {
        MetadataAggregator {
            source,
            radius_meters,
        }
    }

    pub fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    pub fn source(&self) -> &M {
        &self.source
    }

    /// returns the summary for display along with the raw payload for storage.
    pub async fn aggregate(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<(RouteMetadataSummary, Value), RouteError> {
        let center = sample_point(coordinates)?;
        let query = AroundQuery::road_features(center, self.radius_meters);
        let raw = self.source.query(&query).await?;
        let summary = summarize_raw(&raw)?;
        log::info!(
            "aggregated metadata around {center}: {} highway type(s), {} speed limit(s), {} lane(s)",
            summary.highway_types.len(),
            summary.max_speeds.len(),
            summary.total_lanes
        );
        Ok((summary, raw))
    }
}

/// the single point standing in for the whole route.
pub fn sample_point(coordinates: &[Coordinate]) -> Result<Coordinate, RouteError> {
    coordinates.first().copied().ok_or_else(|| {
        RouteError::ValidationError(String::from(
            "cannot sample metadata for a route without coordinates",
        ))
    })
}

/// decodes a raw Overpass payload and reduces its elements. used both for
/// fresh results and for payloads re-read from the store.
pub fn summarize_raw(raw: &Value) -> Result<RouteMetadataSummary, RouteError> {
    let response = OverpassResponse::try_from(raw)
        .map_err(|e| RouteError::service(ServiceName::Metadata, e))?;
    Ok(tag_ops::summarize(&response.elements))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::model::ErrorKind;
    use serde_json::json;

    struct FixedSource {
        payload: Value,
        queries: Mutex<Vec<String>>,
    }

    impl MetadataSource for FixedSource {
        async fn query(&self, query: &AroundQuery) -> Result<Value, RouteError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.payload.clone())
        }
    }

    fn coords() -> Vec<Coordinate> {
        vec![
            Coordinate::new(-0.1276, 51.5072).unwrap(),
            Coordinate::new(2.3522, 48.8566).unwrap(),
        ]
    }

    #[tokio::test]
    async fn samples_first_coordinate_only() {
        let payload = json!({"elements": [
            {"type": "way", "id": 1, "tags": {"highway": "primary", "maxspeed": "30 mph", "lanes": "two"}}
        ]});
        let source = FixedSource {
            payload: payload.clone(),
            queries: Mutex::new(vec![]),
        };
        let aggregator = MetadataAggregator::new(source, DEFAULT_SAMPLE_RADIUS_METERS);
        let (summary, raw) = aggregator.aggregate(&coords()).await.unwrap();
        assert_eq!(raw, payload);
        assert_eq!(summary.max_speeds, vec![30]);
        assert_eq!(summary.total_lanes, 0);

        let queries = aggregator.source.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].contains("around:1000,51.5072,-0.1276"));
        assert!(!queries[0].contains("48.8566"));
    }

    #[tokio::test]
    async fn empty_result_is_empty_summary() {
        let source = FixedSource {
            payload: json!({"elements": []}),
            queries: Mutex::new(vec![]),
        };
        let aggregator = MetadataAggregator::new(source, DEFAULT_SAMPLE_RADIUS_METERS);
        let (summary, _) = aggregator.aggregate(&coords()).await.unwrap();
        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn no_coordinates_is_rejected() {
        let source = FixedSource {
            payload: json!({}),
            queries: Mutex::new(vec![]),
        };
        let aggregator = MetadataAggregator::new(source, DEFAULT_SAMPLE_RADIUS_METERS);
        let result = aggregator.aggregate(&[]).await;
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
        assert!(aggregator.source.queries.lock().unwrap().is_empty());
    }

    #[test]
    fn undecodable_elements_are_service_errors() {
        let raw = json!({"elements": [{"id": 1}]});
        assert_eq!(summarize_raw(&raw).unwrap_err().kind(), ErrorKind::Service);
    }
}
