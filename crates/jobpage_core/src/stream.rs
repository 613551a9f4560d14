//! Job stream plumbing: path matching, endpoint URL, frame decoding.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::PayloadError;

pub type JobId = u64;

/// Line appended when the socket handshake completes.
pub const STREAM_OPENED_LINE: &str = "Web socket connection opened";
/// Line appended when the socket closes. There is no reconnect.
pub const STREAM_CLOSED_LINE: &str = "Web socket connection closed.";

static JOB_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/jobs/(\d+)").expect("valid regex"));

/// Extracts the numeric job id from a page path such as `/jobs/42`.
///
/// Returns `None` when the path does not carry a job id (or the digits do
/// not fit a [`JobId`]); the caller renders a diagnostic instead of
/// opening a connection.
pub fn job_id_from_path(path: &str) -> Option<JobId> {
    let captures = JOB_PATH_RE.captures(path)?;
    captures[1].parse().ok()
}

/// The diagnostic line rendered when the page path carries no job id.
pub fn path_diagnostic(path: &str) -> String {
    format!("Unable to parse path from: {path}")
}

/// Builds the per-job stream endpoint for `host`.
pub fn stream_url(host: &str, job_id: JobId) -> String {
    format!("ws://{host}/jobs/{job_id}/stream")
}

/// One decoded job stream frame.
///
/// The wire shape is internally tagged: `{"type": "message", ...}` or
/// `{"type": "complete", ...}`. Adding a tag on the server requires adding
/// a variant here, which the exhaustive dispatch in `update` then forces
/// the page to handle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JobStatus {
    /// Free-form progress text to append to the message region.
    Message { message: String },
    /// Completion fraction in `0.0..=1.0`.
    Complete {
        #[serde(rename = "percentComplete")]
        percent_complete: f64,
    },
}

/// Decodes one inbound frame in typed mode.
pub fn decode_frame(frame: &str) -> Result<JobStatus, PayloadError> {
    serde_json::from_str(frame).map_err(PayloadError::JobStatus)
}

/// Converts a completion fraction to a CSS width, rounding to the nearest
/// whole percent: `0.5` becomes `"50%"`, `0.005` becomes `"1%"`.
pub fn progress_width(fraction: f64) -> String {
    let percent = (fraction * 100.0).round() as i64;
    format!("{percent}%")
}
