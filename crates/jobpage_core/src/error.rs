use thiserror::Error;

/// Failure to interpret a server-supplied payload.
///
/// Each variant corresponds to one page feature; a payload error never
/// aborts more than the feature that owns the payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The injected subscription array was not valid JSON for `[{name}]`.
    #[error("invalid subscriptions payload: {0}")]
    Subscriptions(serde_json::Error),
    /// An inbound job stream frame did not decode to a known status.
    #[error("unrecognized job status frame: {0}")]
    JobStatus(serde_json::Error),
}
