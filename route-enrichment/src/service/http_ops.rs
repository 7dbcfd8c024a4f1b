//! shared request plumbing for the service adapters. every call is a single
//! round trip; nothing is retried.
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::model::{RouteError, ServiceName};

/// builds the client shared by all adapters. without a timeout, the
/// transport default applies.
pub fn build_client(timeout_seconds: Option<u64>) -> Result<Client, RouteError> {
    let builder = Client::builder();
    let builder = match timeout_seconds {
        Some(secs) => builder.timeout(Duration::from_secs(secs)),
        None => builder,
    };
    builder
        .build()
        .map_err(|e| RouteError::ConfigurationError(format!("failure building HTTP client: {e}")))
}

/// parses a configured base URL, naming the service in the error.
pub fn parse_base_url(base: &str, service: ServiceName) -> Result<Url, RouteError> {
    Url::parse(base.trim_end_matches('/'))
        .map_err(|e| RouteError::service(service, format!("invalid base URL '{base}': {e}")))
}

/// appends percent-encoded path segments to a configured base URL.
pub fn join_segments(base: &str, segments: &[&str], service: ServiceName) -> Result<Url, RouteError> {
    let mut url = parse_base_url(base, service)?;
    url.path_segments_mut()
        .map_err(|_| {
            RouteError::service(
                service,
                format!("base URL '{base}' cannot have path segments"),
            )
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// URL without its query string, for logging. keeps access tokens out of the logs.
pub fn redact(url: &Url) -> String {
    format!("{}{}", url.origin().ascii_serialization(), url.path())
}

/// sends the request. only transport failures are errors here.
pub async fn send(request: RequestBuilder, service: ServiceName) -> Result<Response, RouteError> {
    match request.send().await {
        Ok(response) => {
            log::debug!(
                "{service} response {} from {}",
                response.status().as_u16(),
                redact(response.url())
            );
            Ok(response)
        }
        Err(e) => {
            log::warn!(
                "{service} request failed (connect={}, timeout={}): {e}",
                e.is_connect(),
                e.is_timeout()
            );
            Err(RouteError::service(
                service,
                format!("request failed: {}", e.without_url()),
            ))
        }
    }
}

/// fails with the response's status text when it is not a success.
pub fn check_status(response: &Response, service: ServiceName) -> Result<(), RouteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    log::warn!("{service} returned HTTP {status} for {}", redact(response.url()));
    Err(status_error(status, service))
}

/// `ServiceError` carrying the status code and reason phrase.
pub fn status_error(status: StatusCode, service: ServiceName) -> RouteError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    RouteError::service(service, format!("HTTP {} {reason}", status.as_u16()))
}

/// decodes the response body as JSON.
pub async fn read_json<T>(response: Response, service: ServiceName) -> Result<T, RouteError>
where
    T: DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|e| RouteError::service(service, format!("unparseable response: {}", e.without_url())))
}

/// send + status check + JSON decode.
pub async fn fetch_json<T>(request: RequestBuilder, service: ServiceName) -> Result<T, RouteError>
where
    T: DeserializeOwned,
{
    let response = send(request, service).await?;
    check_status(&response, service)?;
    read_json(response, service).await
}
