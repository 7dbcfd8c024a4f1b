use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::model::RouteError;

const DEFAULT_CONFIG: &str = include_str!("route-enrichment.toml");
pub const ENV_PREFIX: &str = "ROUTE_ENRICHMENT";

/// service endpoints and run options for a route enrichment session.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RouteEnrichmentConfig {
    /// mapping provider token, sent as the `access_token` query parameter.
    pub access_token: String,
    pub geocoding_url: String,
    pub directions_url: String,
    pub overpass_url: String,
    pub store_url: String,
    pub sample_radius_meters: u32,
    pub parallel_geocoding: bool,
    /// when absent the transport default applies.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl RouteEnrichmentConfig {
    /// layers the built-in defaults, an optional user file, and the
    /// `ROUTE_ENRICHMENT_*` environment.
    pub fn load(config_file: Option<&str>) -> Result<RouteEnrichmentConfig, RouteError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        if let Some(f) = config_file {
            log::info!("reading route enrichment configuration from {f}");
            builder = builder.add_source(File::new(f, file_format(f)?));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| {
                RouteError::ConfigurationError(format!("failure reading configuration: {e}"))
            })?
            .try_deserialize::<RouteEnrichmentConfig>()
            .map_err(|e| {
                RouteError::ConfigurationError(format!("failure decoding configuration: {e}"))
            })
    }

    /// the mapping provider rejects every request without a token, so fail
    /// before any stage runs.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.access_token.trim().is_empty() {
            return Err(RouteError::ConfigurationError(format!(
                "missing access token, set access_token in the configuration file or {ENV_PREFIX}_ACCESS_TOKEN"
            )));
        }
        if self.sample_radius_meters == 0 {
            return Err(RouteError::ConfigurationError(String::from(
                "sample_radius_meters must be positive",
            )));
        }
        Ok(())
    }
}

impl Default for RouteEnrichmentConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            geocoding_url: String::from("https://api.mapbox.com/geocoding/v5/mapbox.places"),
            directions_url: String::from("https://api.mapbox.com/directions/v5/mapbox/driving"),
            overpass_url: String::from("https://overpass-api.de/api/interpreter"),
            store_url: String::from("http://127.0.0.1:5000"),
            sample_radius_meters: 1000,
            parallel_geocoding: true,
            request_timeout_seconds: None,
        }
    }
}

impl TryFrom<&String> for RouteEnrichmentConfig {
    type Error = RouteError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        RouteEnrichmentConfig::load(Some(f))
    }
}

fn file_format(f: &str) -> Result<FileFormat, RouteError> {
    if f.ends_with(".toml") {
        Ok(FileFormat::Toml)
    } else if f.ends_with(".json") {
        Ok(FileFormat::Json)
    } else {
        Err(RouteError::ConfigurationError(format!(
            "unsupported file type: {f}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorKind;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let from_toml: RouteEnrichmentConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(from_toml, RouteEnrichmentConfig::default());
    }

    #[test]
    fn user_file_overrides_defaults() {
        let path = std::env::temp_dir().join("route-enrichment-config-test.json");
        std::fs::write(&path, r#"{"access_token": "pk.test", "sample_radius_meters": 250}"#).unwrap();
        let conf = RouteEnrichmentConfig::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(conf.access_token, "pk.test");
        assert_eq!(conf.sample_radius_meters, 250);
        assert_eq!(conf.store_url, "http://127.0.0.1:5000");
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn unsupported_extension_rejected() {
        let err = RouteEnrichmentConfig::load(Some("settings.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn missing_token_fails_validation() {
        let err = RouteEnrichmentConfig::default().validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
