#![allow(clippy::unwrap_used, clippy::expect_used)]

use lexle_core::errors::{ExError, ExErrorKind, LexleError};
use lexle_core::logging_facility::test_capture::init_test_capture;
use lexle_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_SKIP, EVENT_START};
use lexle_core::{log_op_end, log_op_error, log_op_skip, log_op_start};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, dir = "imports");

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_START))
        .collect();

    assert_eq!(start_events.len(), 1);
    assert_eq!(start_events[0].field("dir"), Some("imports"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, files = 3u64);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
    assert_eq!(end_events[0].field("files"), Some("3"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = LexleError::CategoryNotFound {
        category_id: "c1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_events: Vec<_> = events
        .iter()
        .filter(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].level, Level::ERROR);
    assert_eq!(error_events[0].field("err_code"), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_log_op_skip_is_warning_with_cause() {
    let capture = init_test_capture();
    let op_name = "test_log_op_skip_unique_4";

    let err = ExError::new(ExErrorKind::Io).with_message("disk on fire");
    log_op_skip!(op_name, err, file = "broken.json");

    let skips = capture.count_events(|e| {
        e.op() == Some(op_name)
            && e.event() == Some(EVENT_SKIP)
            && e.level == Level::WARN
    });
    assert_eq!(skips, 1);

    let event = capture
        .events_with_field("file", "broken.json")
        .into_iter()
        .find(|e| e.op() == Some(op_name))
        .expect("skip event should carry the file name");
    assert_eq!(event.field("err_code"), Some("ERR_IO"));
    assert!(event.field("err_msg").unwrap().contains("disk on fire"));
}

#[test]
fn test_start_end_pair() {
    let capture = init_test_capture();
    let op_name = "test_start_end_pair_unique_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    assert_eq!(
        capture.count_events(|e| e.op() == Some(op_name)),
        2
    );
}
