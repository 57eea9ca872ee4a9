//! tix binary: parse the CLI, load configuration, wire the HTTP client, and
//! dispatch to the command runner.

use std::io;

use anyhow::Result;
use clap::Parser;

use tix::cli::{Cli, Commands, IssueCommands, LabelCommands};
use tix::commands::{KeyFeed, MoveOptions, Runner, WatchDirection};
use tix::config::{api_token, TixConfig};
use tix::errors::BulkError;
use tix::output::{ExitCode, OutputContext};
use tix::remote::HttpRemote;

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }
}

/// Usage errors exit 2 (clap's convention for bad invocations); everything
/// else that reaches here is a batch-level failure and exits 1.
fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<BulkError>() {
        Some(BulkError::Usage(_)) => ExitCode::Usage,
        _ => ExitCode::Error,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let out = OutputContext::new(cli.quiet);

    let config = TixConfig::load(cli.config.as_deref())?;
    let server = config.server()?;
    let project = config.project_key(cli.project.as_deref());

    let remote = HttpRemote::new(
        &server.url,
        server.login.clone().unwrap_or_default(),
        api_token()?,
        server.auth_scheme()?,
        cli.debug,
    );
    let runner = Runner::new(&remote, &project, &out);

    let Commands::Issue(issue_command) = cli.command;
    match issue_command {
        IssueCommands::AssignBulk { args, source } => {
            let feed = KeyFeed::from_flags(source.stdin, source.jql.as_deref(), stdin_reader);
            runner.assign_bulk(&args, feed)?;
        }
        IssueCommands::CommentBulk {
            args,
            internal,
            source,
        } => {
            let feed = KeyFeed::from_flags(source.stdin, source.jql.as_deref(), stdin_reader);
            runner.comment_bulk(&args, internal, feed)?;
        }
        IssueCommands::Label(LabelCommands::Bulk {
            args,
            remove,
            source,
        }) => {
            let feed = KeyFeed::from_flags(source.stdin, source.jql.as_deref(), stdin_reader);
            runner.label_bulk(&args, remove, feed)?;
        }
        IssueCommands::MoveBulk {
            args,
            comment,
            assignee,
            resolution,
        } => {
            let options = MoveOptions {
                comment,
                assignee,
                resolution,
            };
            runner.move_bulk(&args, &options)?;
        }
        IssueCommands::WatchBulk { args, source } => {
            let feed = KeyFeed::from_flags(source.stdin, source.jql.as_deref(), stdin_reader);
            runner.watch_bulk(&args, WatchDirection::Watch, feed)?;
        }
        IssueCommands::UnwatchBulk { args, source } => {
            let feed = KeyFeed::from_flags(source.stdin, source.jql.as_deref(), stdin_reader);
            runner.watch_bulk(&args, WatchDirection::Unwatch, feed)?;
        }
        IssueCommands::StoryPoints { args, field } => {
            runner.story_points(&args, field.as_deref(), config.custom_fields())?;
        }
        IssueCommands::Custom { args } => {
            runner.custom_fields(&args, config.custom_fields())?;
        }
    }

    Ok(())
}

fn stdin_reader() -> io::BufReader<io::Stdin> {
    io::BufReader::new(io::stdin())
}
