use errstack::prelude::*;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("database offline")]
struct DatabaseError;

#[test]
fn get_message_joins_outer_to_inner() {
    let err = errstack::wrap(errstack::wrap(errstack::new("a"), "b"), "c");
    assert_eq!(get_message(&err), "c b a");
}

#[test]
fn get_message_appends_foreign_terminal_once() {
    let err = errstack::wrap(DatabaseError, "query failed");
    assert_eq!(get_message(&err), "query failed database offline");
}

#[test]
fn get_message_on_a_foreign_input_renders_it() {
    assert_eq!(get_message(&DatabaseError), "database offline");
}

#[test]
fn chain_yields_one_item_per_node() {
    let err = errstack::wrap(errstack::wrap(errstack::new("a"), "b"), "c");
    assert_eq!(Chain::new(&err).count(), 3);

    let with_foreign = errstack::wrap(DatabaseError, "outer");
    assert_eq!(Chain::new(&with_foreign).count(), 2);
}

#[test]
fn annotated_states_are_outermost_first() {
    let err = errstack::wrap(errstack::wrap(errstack::new("a"), "b"), "c");
    let states = err.annotated_states();

    assert_eq!(states.len(), 3);
    assert_eq!(states[0]["_message"], "c");
    assert_eq!(states[1]["_message"], "b");
    assert_eq!(states[2]["_message"], "a");
}

#[test]
fn annotated_states_copy_state_and_synthesize_location() {
    let mut state = StateMap::new();
    state.insert("user_id".into(), json!(42));

    let err = errstack::new("quota exceeded").with_state(state);
    let states = err.annotated_states();

    assert_eq!(states[0]["user_id"], 42);
    assert_eq!(states[0]["_message"], "quota exceeded");
    let location = states[0]["_location"].as_str().unwrap();
    assert!(location.starts_with("at "), "got: {location}");

    // Synthesis writes into a copy, not the stored state.
    assert_eq!(err.state().unwrap().len(), 1);
    assert!(!err.state().unwrap().contains_key("_message"));
}

#[test]
fn annotated_states_foreign_terminal_has_only_message() {
    let err = errstack::wrap(DatabaseError, "query failed");
    let states = err.annotated_states();

    assert_eq!(states.len(), 2);
    assert_eq!(states[1]["_message"], "database offline");
    assert_eq!(states[1].len(), 1);
    assert!(!states[1].contains_key("_location"));
}

#[test]
fn report_carries_markers_and_verbatim_innermost_stack() {
    let innermost = errstack::new("a");
    let original_stack = innermost.stack().to_string();
    let err = errstack::wrap(errstack::wrap(innermost, "b"), "c");

    let report = err.to_string();
    assert!(report.starts_with("ERROR:\n"));

    let (_, stack) = report
        .split_once("\n\nORIGINAL STACK TRACE:\n")
        .expect("report must contain the original-stack marker");
    assert_eq!(stack, original_stack);
}

#[test]
fn report_lists_message_and_state_per_node() {
    let mut state = StateMap::new();
    state.insert("shard".into(), json!(7));

    let err = errstack::wrap(errstack::new("a"), "b").with_state(state);
    let report = err.to_string();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "ERROR:");
    assert_eq!(lines[1], "b");
    assert_eq!(lines[2], "{\"shard\":7}");
    assert_eq!(lines[3], "a");
    // Unset state serializes as null.
    assert_eq!(lines[4], "null");
}

#[test]
fn report_renders_foreign_node_without_state_line() {
    let outer = errstack::wrap(DatabaseError, "query failed");
    let report = default_error(&outer);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "ERROR:");
    assert_eq!(lines[1], "query failed");
    assert_eq!(lines[2], "null");
    assert_eq!(lines[3], "database offline");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "ORIGINAL STACK TRACE:");
}

#[test]
fn traversal_is_idempotent() {
    let mut state = StateMap::new();
    state.insert("k".into(), json!("v"));
    let err = errstack::wrap(errstack::new("inner"), "outer").with_state(state);

    assert_eq!(get_message(&err), get_message(&err));
    assert_eq!(err.annotated_states(), err.annotated_states());
    assert_eq!(err.to_string(), err.to_string());
}
