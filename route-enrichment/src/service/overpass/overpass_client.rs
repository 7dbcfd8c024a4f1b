use std::future::Future;

use reqwest::{Client, Url};
use serde_json::Value;

use super::AroundQuery;
use crate::{
    model::{RouteError, ServiceName},
    service::http_ops,
};

/// source of raw tagged map features.
pub trait MetadataSource: Send + Sync {
    /// runs the query and returns the service's payload untouched.
    fn query(&self, query: &AroundQuery) -> impl Future<Output = Result<Value, RouteError>> + Send;
}

/// Overpass API interpreter endpoint.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    interpreter_url: String,
}

impl OverpassClient {
    pub fn new(client: Client, interpreter_url: &str) -> OverpassClient {
        OverpassClient {
            client,
            interpreter_url: String::from(interpreter_url),
        }
    }
}

impl MetadataSource for OverpassClient {
    async fn query(&self, query: &AroundQuery) -> Result<Value, RouteError> {
        let url = interpreter_url(&self.interpreter_url, query)?;
        log::debug!(
            "overpass query around {} (radius {}m)",
            query.center,
            query.radius_meters
        );
        let payload: Value = http_ops::fetch_json(self.client.get(url), ServiceName::Metadata).await?;
        if !payload.is_object() {
            return Err(RouteError::service(
                ServiceName::Metadata,
                "overpass response is not a JSON object",
            ));
        }
        Ok(payload)
    }
}

/// `{interpreter}?data={query}`
pub fn interpreter_url(base: &str, query: &AroundQuery) -> Result<Url, RouteError> {
    let mut url = http_ops::parse_base_url(base, ServiceName::Metadata)?;
    url.query_pairs_mut()
        .append_pair("data", &query.to_string());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    #[test]
    fn query_travels_in_data_parameter() {
        let center = Coordinate::new(2.35, 48.85).unwrap();
        let query = AroundQuery::road_features(center, 1000);
        let url = interpreter_url("https://overpass-api.de/api/interpreter", &query).unwrap();
        assert_eq!(url.path(), "/api/interpreter");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "data");
        assert_eq!(value, query.to_string());
    }
}
