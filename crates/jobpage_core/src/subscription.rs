use serde::Deserialize;

use crate::PayloadError;

/// A named record describing something the viewing user is subscribed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    pub name: String,
}

/// Parses the server-injected JSON array of subscription records.
///
/// The payload is produced by the page renderer, so a failure here means the
/// server and page disagree on the format; the caller drops the whole
/// subscription feature rather than rendering a partial guess.
pub fn parse_subscriptions(json: &str) -> Result<Vec<Subscription>, PayloadError> {
    serde_json::from_str(json).map_err(PayloadError::Subscriptions)
}

/// The count summary rendered after the subscription list.
pub fn summary_line(count: usize) -> String {
    format!("Found {count} subscription(s).")
}
