//! Bulk labels: positional split, set-merge idempotence, removal deltas.


use std::io::Cursor;

use harness::{args, FakeRemote};
use tix::commands::{KeyFeed, Runner};
use tix::errors::BulkError;
use tix::output::OutputContext;

fn quiet() -> OutputContext {
    OutputContext::new(true)
}

#[test]
fn leading_keys_and_trailing_labels_split() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    runner
        .label_bulk(
            &args(&["PROJ-1", "PROJ-2", "urgent", "backend"]),
            false,
            KeyFeed::Args,
        )
        .unwrap();

    assert_eq!(remote.labels_of("PROJ-1"), vec!["backend", "urgent"]);
    assert_eq!(remote.labels_of("PROJ-2"), vec!["backend", "urgent"]);
}

#[test]
fn re_adding_existing_labels_is_idempotent() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    for _ in 0..2 {
        runner
            .label_bulk(&args(&["PROJ-1", "urgent"]), false, KeyFeed::Args)
            .unwrap();
    }

    // Set merge: no duplicates, no error on the second run.
    assert_eq!(remote.labels_of("PROJ-1"), vec!["urgent"]);
}

#[test]
fn remove_flag_turns_labels_into_removal_deltas() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    runner
        .label_bulk(
            &args(&["PROJ-1", "urgent", "backend"]),
            false,
            KeyFeed::Args,
        )
        .unwrap();
    runner
        .label_bulk(&args(&["PROJ-1", "urgent"]), true, KeyFeed::Args)
        .unwrap();

    assert_eq!(remote.labels_of("PROJ-1"), vec!["backend"]);
}

#[test]
fn removing_an_absent_label_is_not_an_error() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let result = runner.label_bulk(&args(&["PROJ-1", "ghost-label"]), true, KeyFeed::Args);
    assert!(result.is_ok());
    assert!(remote.labels_of("PROJ-1").is_empty());
}

#[test]
fn no_labels_is_a_usage_error() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let err = runner
        .label_bulk(&args(&["PROJ-1", "PROJ-2"]), false, KeyFeed::Args)
        .unwrap_err();
    assert!(matches!(err, BulkError::Usage(_)));
    assert!(err.to_string().contains("no labels provided"));
}

#[test]
fn stdin_mode_treats_every_positional_as_a_label() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    // "PROJ-9" would be key-shaped positionally; under stdin it is a label.
    let feed = KeyFeed::Stdin(Box::new(Cursor::new("PROJ-1\n")));
    runner
        .label_bulk(&args(&["PROJ-9", "urgent"]), false, feed)
        .unwrap();

    assert_eq!(remote.labels_of("PROJ-1"), vec!["PROJ-9", "urgent"]);
}

#[test]
fn partial_failure_applies_remaining_keys() {
    let remote = FakeRemote::new().failing_on(&["PROJ-2"]);
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let result = runner.label_bulk(
        &args(&["PROJ-1", "PROJ-2", "PROJ-3", "urgent"]),
        false,
        KeyFeed::Args,
    );
    assert!(result.is_ok());
    assert_eq!(remote.labels_of("PROJ-1"), vec!["urgent"]);
    assert!(remote.labels_of("PROJ-2").is_empty());
    assert_eq!(remote.labels_of("PROJ-3"), vec!["urgent"]);
}
