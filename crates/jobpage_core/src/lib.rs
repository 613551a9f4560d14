//! Jobpage core: pure page logic, free of any DOM or socket handle.
mod config;
mod effect;
mod error;
mod msg;
mod stream;
mod subscription;
mod update;

pub use config::{PageConfig, StreamFormat};
pub use effect::Effect;
pub use error::PayloadError;
pub use msg::Msg;
pub use stream::{
    decode_frame, job_id_from_path, path_diagnostic, progress_width, stream_url, JobId, JobStatus,
    STREAM_CLOSED_LINE, STREAM_OPENED_LINE,
};
pub use subscription::{parse_subscriptions, summary_line, Subscription};
pub use update::{update, AppState};
