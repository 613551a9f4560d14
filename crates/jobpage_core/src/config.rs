/// Server-injected page configuration, captured once at page init.
///
/// The page template writes these values into the document before any script
/// runs; the platform layer reads them exactly once and hands them here, so
/// the rest of the code never touches process-wide globals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageConfig {
    /// Error banner text. Empty means no alert is shown.
    pub error: String,
    /// JSON-encoded array of subscription records.
    pub subscriptions_json: String,
    /// Host (and optional port) for the job stream socket, e.g. `"example.com:8081"`.
    pub socket_host: String,
    /// Path of the current page, e.g. `"/jobs/42"`.
    pub path: String,
    /// Wire format expected on the job stream.
    pub stream_format: StreamFormat,
}

/// Wire format of inbound job stream frames.
///
/// The two page revisions in production disagree here; keeping both as a
/// closed enum lets either page boot the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamFormat {
    /// Frames are raw text, rendered verbatim.
    PlainText,
    /// Frames are JSON-encoded [`crate::JobStatus`] values.
    #[default]
    Typed,
}
