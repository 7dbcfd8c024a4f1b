use std::fmt::Display;

use thiserror::Error;

use super::RouteId;

/// the external collaborator that produced a [`RouteError::ServiceError`].
/// route store calls are split by operation so each gets its own advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceName {
    Geocoding,
    Routing,
    Metadata,
    StoreWrite,
    StoreList,
    StoreRead,
}

impl Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceName::Geocoding => write!(f, "geocoding"),
            ServiceName::Routing => write!(f, "routing"),
            ServiceName::Metadata => write!(f, "metadata"),
            ServiceName::StoreWrite | ServiceName::StoreList | ServiceName::StoreRead => {
                write!(f, "route store")
            }
        }
    }
}

/// matchable category of a [`RouteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    NoRoute,
    Service,
    Configuration,
}

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("invalid search request: {0}")]
    ValidationError(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no stored route with id {0}")]
    RouteNotFound(RouteId),
    #[error("no route found: {0}")]
    NoRoute(String),
    #[error("{service} service failure: {message}")]
    ServiceError {
        service: ServiceName,
        message: String,
    },
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
}

impl RouteError {
    pub fn service(service: ServiceName, message: impl Into<String>) -> RouteError {
        RouteError::ServiceError {
            service,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::ValidationError(_) => ErrorKind::Validation,
            RouteError::NotFound(_) | RouteError::RouteNotFound(_) => ErrorKind::NotFound,
            RouteError::NoRoute(_) => ErrorKind::NoRoute,
            RouteError::ServiceError { .. } => ErrorKind::Service,
            RouteError::ConfigurationError(_) => ErrorKind::Configuration,
        }
    }

    /// short advisory text for the user. the full detail is in the
    /// [`Display`] output, which should go to the log.
    pub fn user_message(&self) -> String {
        match self {
            RouteError::ValidationError(msg) => msg.clone(),
            RouteError::NotFound(_) => String::from("No coordinates found for the given location"),
            RouteError::RouteNotFound(_) => String::from("Failed to retrieve route details"),
            RouteError::NoRoute(_) => String::from("No routes found"),
            RouteError::ServiceError {
                service: ServiceName::StoreWrite,
                ..
            } => String::from("Failed to store route data"),
            RouteError::ServiceError {
                service: ServiceName::StoreList,
                ..
            } => String::from("Failed to retrieve stored routes"),
            RouteError::ServiceError {
                service: ServiceName::StoreRead,
                ..
            } => String::from("Failed to retrieve route details"),
            RouteError::ServiceError { service, .. } => {
                format!("Failed to retrieve route ({service} service unavailable). Please try again.")
            }
            RouteError::ConfigurationError(msg) => format!("Configuration error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display_names_service() {
        let e = RouteError::service(ServiceName::Metadata, "HTTP 504 Gateway Timeout");
        assert_eq!(
            e.to_string(),
            "metadata service failure: HTTP 504 Gateway Timeout"
        );
        assert_eq!(e.kind(), ErrorKind::Service);
    }

    #[test]
    fn store_advisory_follows_operation() {
        let write = RouteError::service(ServiceName::StoreWrite, "connection refused");
        assert_eq!(write.user_message(), "Failed to store route data");
        let list = RouteError::service(ServiceName::StoreList, "HTTP 500 Internal Server Error");
        assert_eq!(list.user_message(), "Failed to retrieve stored routes");
        let read = RouteError::service(ServiceName::StoreRead, "HTTP 500 Internal Server Error");
        assert_eq!(read.user_message(), "Failed to retrieve route details");
    }

    #[test]
    fn missing_stored_route_is_not_a_geocoding_miss() {
        let e = RouteError::RouteNotFound(RouteId(999));
        assert_eq!(e.kind(), ErrorKind::NotFound);
        assert_eq!(e.to_string(), "no stored route with id 999");
        assert_eq!(e.user_message(), "Failed to retrieve route details");
        let geocoding = RouteError::NotFound(String::from("no coordinates found for 'Atlantis'"));
        assert_eq!(
            geocoding.user_message(),
            "No coordinates found for the given location"
        );
    }
}
