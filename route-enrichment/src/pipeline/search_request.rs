use crate::model::RouteError;

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both origin and destination.";

/// a validated origin/destination pair. the strings are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    origin: String,
    destination: String,
}

impl SearchRequest {
    /// rejects blank input before anything touches the network.
    pub fn new(origin: &str, destination: &str) -> Result<SearchRequest, RouteError> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(RouteError::ValidationError(String::from(
                MISSING_INPUT_MESSAGE,
            )));
        }
        Ok(SearchRequest {
            origin: String::from(origin),
            destination: String::from(destination),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}
