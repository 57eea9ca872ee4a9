//! Console output with quiet-mode handling.
//!
//! Progress and success lines go to stdout and honor `--quiet`; warnings go
//! to stderr; data lines (the `Failed:` key list) are never suppressed
//! because scripts parse them.

use std::fmt::Display;
use std::io::{self, Write};

/// Process exit codes.
///
/// Partial success is exit 0 on purpose: bulk semantics are best-effort, and
/// the failed-key list on stdout is the signal for callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Full or partial success.
    Success,
    /// Resolution error or every target failed.
    Error,
    /// Malformed invocation; nothing was attempted. Matches clap's own
    /// exit code for unparseable arguments.
    Usage,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Error => 1,
            Self::Usage => 2,
        }
    }
}

/// Verbosity-aware writer handed down to every command.
pub struct OutputContext {
    quiet: bool,
}

impl OutputContext {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Progress line ("Assigning 3 issues to ..."), suppressed by `--quiet`.
    pub fn info(&self, msg: impl Display) {
        if !self.quiet {
            writeln_safe(io::stdout(), msg);
        }
    }

    /// Final success line, suppressed by `--quiet`.
    pub fn success(&self, msg: impl Display) {
        if !self.quiet {
            writeln_safe(io::stdout(), msg);
        }
    }

    /// Warning to stderr, never suppressed.
    pub fn warning(&self, msg: impl Display) {
        writeln_safe(io::stderr(), format!("Warning: {}", msg));
    }

    /// Machine-parsable output, never suppressed.
    pub fn data(&self, msg: impl Display) {
        writeln_safe(io::stdout(), msg);
    }
}

/// Write a line, exiting quietly on a broken pipe (expected when piping
/// into `head` and friends).
fn writeln_safe(mut w: impl Write, msg: impl Display) {
    if let Err(e) = writeln!(w, "{}", msg) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_the_cli_contract() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::Error.code(), 1);
        assert_eq!(ExitCode::Usage.code(), 2);
    }
}
