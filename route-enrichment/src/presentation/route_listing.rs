use std::fmt::Display;

use super::route_details::TIMESTAMP_FORMAT;
use crate::model::RouteRecordSummary;

pub const NO_STORED_ROUTES_MESSAGE: &str = "No stored routes found.";

/// the stored-routes list. an empty list is a normal, non-error state.
#[derive(Debug, Clone)]
pub struct RouteListingView<'a>(pub &'a [RouteRecordSummary]);

impl Display for RouteListingView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{NO_STORED_ROUTES_MESSAGE}");
        }
        for (idx, route) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "[{}] Route from {} to {}",
                route.id, route.origin, route.destination
            )?;
            write!(f, "    Stored on: {}", route.timestamp.format(TIMESTAMP_FORMAT))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_timestamp, RouteId};

    #[test]
    fn empty_listing() {
        assert_eq!(RouteListingView(&[]).to_string(), NO_STORED_ROUTES_MESSAGE);
    }

    #[test]
    fn lists_routes() {
        let routes = vec![RouteRecordSummary {
            id: RouteId(1),
            origin: String::from("London"),
            destination: String::from("Paris"),
            timestamp: parse_timestamp("2024-11-02T14:05:09").unwrap(),
        }];
        let text = RouteListingView(&routes).to_string();
        assert_eq!(
            text,
            "[1] Route from London to Paris\n    Stored on: 2024-11-02 14:05:09 UTC"
        );
    }
}
