//! Command-line interface definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Jira-compatible issue tracker client
///
/// Exit Codes:
///   0  - Command succeeded (including partial bulk success)
///   1  - Resolution error or all targets failed
///   2  - Invalid arguments or usage error
#[derive(Parser)]
#[command(name = "tix")]
#[command(about = "Command-line client for Jira-compatible issue trackers", long_about = None)]
pub struct Cli {
    /// Suppress progress and success output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log each HTTP request to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the config file (default: $TIX_CONFIG, then the platform
    /// config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project key override (default: $TIX_PROJECT, then the config file)
    #[arg(long, global = true, value_name = "KEY")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Issue commands
    #[command(subcommand)]
    Issue(IssueCommands),
}

/// Input-source flags shared by every bulk command.
#[derive(Args, Debug, Default)]
pub struct BulkSourceArgs {
    /// Read issue keys from stdin (one per line)
    #[arg(long, conflicts_with = "jql")]
    pub stdin: bool,

    /// Apply to all issues matching a JQL query (capped at 1000 issues)
    #[arg(long, value_name = "QUERY")]
    pub jql: Option<String>,
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// Assign multiple issues to a user
    ///
    /// All issues are assigned to the same user. The assignee may be a name,
    /// an email address, or one of the sentinels "x"/"none"/"unassign"
    /// (clear the assignee) and "default" (project default assignee).
    #[command(name = "assign-bulk", visible_alias = "assign-batch")]
    AssignBulk {
        /// Issue keys followed by the assignee
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,

        #[command(flatten)]
        source: BulkSourceArgs,
    },

    /// Add the same comment to multiple issues
    #[command(name = "comment-bulk", visible_alias = "comment-batch")]
    CommentBulk {
        /// Issue keys followed by the comment text
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,

        /// Add as internal comment
        #[arg(long)]
        internal: bool,

        #[command(flatten)]
        source: BulkSourceArgs,
    },

    /// Label commands
    #[command(subcommand)]
    Label(LabelCommands),

    /// Transition multiple issues to a given state
    ///
    /// The state is validated against the first issue's available
    /// transitions and the same transition is applied to every issue.
    #[command(name = "move-bulk", visible_aliases = ["move-batch", "transition-bulk"])]
    MoveBulk {
        /// Issue keys followed by the target state
        #[arg(required = true, num_args = 2..)]
        args: Vec<String>,

        /// Add a comment to all issues
        #[arg(long, value_name = "TEXT")]
        comment: Option<String>,

        /// Assign all issues to a user
        #[arg(short, long, value_name = "USER")]
        assignee: Option<String>,

        /// Set resolution for all issues
        #[arg(short = 'R', long, value_name = "NAME")]
        resolution: Option<String>,
    },

    /// Add multiple issues to watchers
    ///
    /// A trailing argument that does not look like an issue key is treated
    /// as the watcher; otherwise the current user is added.
    #[command(name = "watch-bulk", visible_alias = "watch-batch")]
    WatchBulk {
        /// Issue keys, optionally followed by a watcher
        #[arg(num_args = 0..)]
        args: Vec<String>,

        #[command(flatten)]
        source: BulkSourceArgs,
    },

    /// Remove a watcher from multiple issues
    #[command(name = "unwatch-bulk", visible_alias = "unwatch-batch")]
    UnwatchBulk {
        /// Issue keys, optionally followed by a watcher
        #[arg(num_args = 0..)]
        args: Vec<String>,

        #[command(flatten)]
        source: BulkSourceArgs,
    },

    /// Set or update story points for issue(s)
    ///
    /// Story points live in a custom field; configure it under
    /// [[fields.custom]] or name it with --field.
    #[command(name = "story-points", visible_aliases = ["sp", "points"])]
    StoryPoints {
        /// Issue keys followed by the points value
        #[arg(required = true, num_args = 2..)]
        args: Vec<String>,

        /// Custom field name for story points (overrides autodetection)
        #[arg(long, value_name = "NAME")]
        field: Option<String>,
    },

    /// Set custom fields on issue(s)
    ///
    /// Trailing FIELD=VALUE pairs are matched against the configured custom
    /// fields by name; values are coerced to the field's declared datatype.
    Custom {
        /// Issue keys followed by FIELD=VALUE pairs
        #[arg(required = true, num_args = 2..)]
        args: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum LabelCommands {
    /// Add or remove labels on multiple issues
    ///
    /// Leading arguments shaped like issue keys (PROJ-123 or a bare number)
    /// are the targets; the rest are labels. A label that itself looks like
    /// an issue key must be applied through --stdin or --jql mode, where all
    /// positionals are labels.
    #[command(visible_alias = "batch")]
    Bulk {
        /// Issue keys followed by labels (all labels under --stdin/--jql)
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,

        /// Remove the labels instead of adding them
        #[arg(long)]
        remove: bool,

        #[command(flatten)]
        source: BulkSourceArgs,
    },
}
