//! Target sources: stdin and jql feeds through the full command pipeline.


use std::io::Cursor;

use harness::{args, FakeRemote};
use tix::commands::{KeyFeed, Runner};
use tix::errors::BulkError;
use tix::output::OutputContext;

fn quiet() -> OutputContext {
    OutputContext::new(true)
}

#[test]
fn stdin_feed_supplies_the_targets_and_ignores_positionals() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let feed = KeyFeed::Stdin(Box::new(Cursor::new("proj-1\n2\n\nPROJ-1\n")));
    runner
        .comment_bulk(&args(&["looks good"]), false, feed)
        .unwrap();

    // Normalized, deduplicated, first-seen order.
    assert_eq!(
        remote.calls(),
        vec![
            "comment PROJ-1 internal=false",
            "comment PROJ-2 internal=false",
        ]
    );
}

#[test]
fn empty_stdin_fails_regardless_of_positional_args() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let feed = KeyFeed::Stdin(Box::new(Cursor::new("")));
    let err = runner
        .comment_bulk(&args(&["PROJ-1", "PROJ-2", "looks good"]), false, feed)
        .unwrap_err();
    assert!(matches!(err, BulkError::Resolution(_)));
    assert!(err.to_string().contains("no issues found"));
    assert!(remote.calls().is_empty());
}

#[test]
fn jql_feed_queries_the_remote_for_targets() {
    let remote = FakeRemote::new().with_query_results(&["PROJ-7", "PROJ-8"]);
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let feed = KeyFeed::Jql("status = 'To Do'");
    runner.comment_bulk(&args(&["ready"]), true, feed).unwrap();

    assert_eq!(
        remote.calls(),
        vec![
            "search_issues status = 'To Do'",
            "comment PROJ-7 internal=true",
            "comment PROJ-8 internal=true",
        ]
    );
}

#[test]
fn empty_jql_result_is_a_resolution_error() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let err = runner
        .comment_bulk(&args(&["ready"]), false, KeyFeed::Jql("status = 'Gone'"))
        .unwrap_err();
    assert!(err.to_string().contains("no issues found"));
}

#[test]
fn from_flags_prefers_stdin_then_jql_then_args() {
    let stdin_feed = KeyFeed::from_flags(true, Some("q"), || Box::new(Cursor::new("")));
    assert!(matches!(stdin_feed, KeyFeed::Stdin(_)));

    let jql_feed = KeyFeed::from_flags(false, Some("q"), || Box::new(Cursor::new("")));
    assert!(matches!(jql_feed, KeyFeed::Jql("q")));

    // An empty jql string does not select query mode.
    let args_feed = KeyFeed::from_flags(false, Some(""), || Box::new(Cursor::new("")));
    assert!(matches!(args_feed, KeyFeed::Args));

    let plain = KeyFeed::from_flags(false, None, || Box::new(Cursor::new("")));
    assert!(matches!(plain, KeyFeed::Args));
}

#[test]
fn empty_comment_is_a_usage_error() {
    let remote = FakeRemote::new();
    let out = quiet();
    let runner = Runner::new(&remote, "PROJ", &out);

    let err = runner
        .comment_bulk(&args(&["PROJ-1", ""]), false, KeyFeed::Args)
        .unwrap_err();
    assert!(matches!(err, BulkError::Usage(_)));
}
