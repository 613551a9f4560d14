use jobpage_core::{
    decode_frame, job_id_from_path, progress_width, stream_url, update, AppState, Effect,
    JobStatus, Msg, PageConfig, StreamFormat, STREAM_CLOSED_LINE, STREAM_OPENED_LINE,
};

fn typed_state(path: &str) -> AppState {
    AppState::new(PageConfig {
        subscriptions_json: "[]".to_string(),
        socket_host: "example.com:8081".to_string(),
        path: path.to_string(),
        stream_format: StreamFormat::Typed,
        ..PageConfig::default()
    })
}

#[test]
fn job_id_is_extracted_from_matching_paths() {
    assert_eq!(job_id_from_path("/jobs/42"), Some(42));
    assert_eq!(job_id_from_path("/jobs/42/stream"), Some(42));
    assert_eq!(job_id_from_path("/jobs/0"), Some(0));
}

#[test]
fn job_id_is_absent_for_non_matching_paths() {
    assert_eq!(job_id_from_path("/"), None);
    assert_eq!(job_id_from_path("/jobs/"), None);
    assert_eq!(job_id_from_path("/jobs/abc"), None);
    assert_eq!(job_id_from_path("/subscriptions"), None);
}

#[test]
fn matching_path_connects_to_the_numeric_segment() {
    let effects = update(&typed_state("/jobs/42"), Msg::PageReady);
    let urls: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::ConnectJobStream { url } => Some(url.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(urls, vec!["ws://example.com:8081/jobs/42/stream"]);
}

#[test]
fn non_matching_path_yields_one_diagnostic_and_no_connect() {
    page_logging::initialize_for_tests();
    let effects = update(&typed_state("/about"), Msg::PageReady);

    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::ConnectJobStream { .. })));
    let lines: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::AppendJobLine { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec!["Unable to parse path from: /about"]);
}

#[test]
fn stream_url_formats_host_and_id() {
    assert_eq!(stream_url("localhost:8081", 7), "ws://localhost:8081/jobs/7/stream");
}

#[test]
fn open_and_close_append_the_fixed_lines() {
    let state = typed_state("/jobs/1");

    let opened = update(&state, Msg::StreamOpened);
    assert_eq!(
        opened,
        vec![Effect::AppendJobLine {
            text: STREAM_OPENED_LINE.to_string()
        }]
    );

    let closed = update(&state, Msg::StreamClosed);
    assert_eq!(
        closed,
        vec![Effect::AppendJobLine {
            text: STREAM_CLOSED_LINE.to_string()
        }]
    );
    // Close never schedules a reconnect.
    assert!(!closed
        .iter()
        .any(|e| matches!(e, Effect::ConnectJobStream { .. })));
}

#[test]
fn typed_message_frame_appends_its_text() {
    let state = typed_state("/jobs/1");
    let frame = r#"{"type":"message","message":"step 3 of 5"}"#;
    let effects = update(&state, Msg::StreamFrame(frame.to_string()));
    assert_eq!(
        effects,
        vec![Effect::AppendJobLine {
            text: "step 3 of 5".to_string()
        }]
    );
}

#[test]
fn typed_complete_frame_sets_progress_width() {
    let state = typed_state("/jobs/1");
    let frame = r#"{"type":"complete","percentComplete":0.5}"#;
    let effects = update(&state, Msg::StreamFrame(frame.to_string()));
    assert_eq!(
        effects,
        vec![Effect::SetProgressWidth {
            width: "50%".to_string()
        }]
    );
}

#[test]
fn undecodable_typed_frame_is_dropped() {
    page_logging::initialize_for_tests();
    let state = typed_state("/jobs/1");
    assert!(update(&state, Msg::StreamFrame("not json".to_string())).is_empty());
    // Unknown tags are a decode failure, not a silent fallthrough.
    let unknown = r#"{"type":"paused"}"#;
    assert!(update(&state, Msg::StreamFrame(unknown.to_string())).is_empty());
}

#[test]
fn plain_text_frames_pass_through_verbatim() {
    let state = AppState::new(PageConfig {
        subscriptions_json: "[]".to_string(),
        socket_host: "localhost:8081".to_string(),
        path: "/jobs/1".to_string(),
        stream_format: StreamFormat::PlainText,
        ..PageConfig::default()
    });
    let effects = update(&state, Msg::StreamFrame("raw line".to_string()));
    assert_eq!(
        effects,
        vec![Effect::AppendJobLine {
            text: "raw line".to_string()
        }]
    );
}

#[test]
fn decode_frame_covers_both_variants() {
    let message = decode_frame(r#"{"type":"message","message":"hi"}"#).unwrap();
    assert_eq!(
        message,
        JobStatus::Message {
            message: "hi".to_string()
        }
    );

    let complete = decode_frame(r#"{"type":"complete","percentComplete":0.25}"#).unwrap();
    assert_eq!(
        complete,
        JobStatus::Complete {
            percent_complete: 0.25
        }
    );

    assert!(decode_frame(r#"{"message":"untagged"}"#).is_err());
}

#[test]
fn progress_width_rounds_to_nearest_percent() {
    assert_eq!(progress_width(0.0), "0%");
    assert_eq!(progress_width(0.5), "50%");
    assert_eq!(progress_width(1.0), "100%");
    // Rounding boundary: 0.005 rounds up, 0.004 rounds down.
    assert_eq!(progress_width(0.005), "1%");
    assert_eq!(progress_width(0.004), "0%");
}
