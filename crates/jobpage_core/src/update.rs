use crate::{
    decode_frame, job_id_from_path, parse_subscriptions, path_diagnostic, progress_width,
    stream_url, summary_line, Effect, JobStatus, Msg, PageConfig, StreamFormat,
    STREAM_CLOSED_LINE, STREAM_OPENED_LINE,
};

/// Per-page state. The page only ever appends to the document, so this is
/// nothing more than the configuration captured at init.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: PageConfig,
}

impl AppState {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }
}

/// Pure update function: applies a message to state and returns the effects
/// to perform, in document order.
pub fn update(state: &AppState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageReady => page_ready_effects(state.config()),
        Msg::StreamOpened => vec![Effect::AppendJobLine {
            text: STREAM_OPENED_LINE.to_string(),
        }],
        Msg::StreamFrame(payload) => frame_effects(state.config().stream_format, &payload),
        Msg::StreamClosed => vec![Effect::AppendJobLine {
            text: STREAM_CLOSED_LINE.to_string(),
        }],
        Msg::NoOp => Vec::new(),
    }
}

fn page_ready_effects(config: &PageConfig) -> Vec<Effect> {
    let mut effects = Vec::new();

    if !config.error.is_empty() {
        effects.push(Effect::ShowAlert {
            text: config.error.clone(),
        });
    }

    // A bad subscription payload aborts only the subscription list; the
    // alert above and the job stream below still run.
    match parse_subscriptions(&config.subscriptions_json) {
        Ok(subscriptions) => {
            let count = subscriptions.len();
            effects.extend(
                subscriptions
                    .into_iter()
                    .map(|s| Effect::AppendSubscription { name: s.name }),
            );
            effects.push(Effect::ShowSubscriptionSummary {
                text: summary_line(count),
            });
        }
        Err(err) => {
            log::warn!("dropping subscription list: {err}");
        }
    }

    match job_id_from_path(&config.path) {
        Some(job_id) => effects.push(Effect::ConnectJobStream {
            url: stream_url(&config.socket_host, job_id),
        }),
        None => effects.push(Effect::AppendJobLine {
            text: path_diagnostic(&config.path),
        }),
    }

    effects
}

fn frame_effects(format: StreamFormat, payload: &str) -> Vec<Effect> {
    match format {
        StreamFormat::PlainText => vec![Effect::AppendJobLine {
            text: payload.to_string(),
        }],
        StreamFormat::Typed => match decode_frame(payload) {
            Ok(JobStatus::Message { message }) => vec![Effect::AppendJobLine { text: message }],
            Ok(JobStatus::Complete { percent_complete }) => vec![Effect::SetProgressWidth {
                width: progress_width(percent_complete),
            }],
            Err(err) => {
                // Frames carry no ordering invariant, so a bad one is
                // dropped without disturbing the rest of the stream.
                log::warn!("dropping job stream frame: {err}");
                Vec::new()
            }
        },
    }
}
