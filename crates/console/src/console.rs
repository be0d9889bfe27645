//! Gated console writer
//!
//! [`Console`] is the single entry point for user-facing output. Every write
//! is gated on the [`OutputConfig`] the console was built with: a category
//! whose level is off produces no bytes and no flush at all. User text goes
//! to stdout, fatal/advisory reports go to stderr, and each operation has a
//! `*_to` variant that takes the writer explicitly so output can be
//! redirected or captured.

use std::fmt;
use std::io::{self, Write};

use crate::config::OutputConfig;
use crate::error::{Error, Result};

/// Message used when aborting instead of prompting for input
const PROMPT_ABORT_MSG: &str = "Needed to prompt, but abort-on-prompts was enabled!";

/// Console writer for CLI output
///
/// Holds the output configuration and performs all gated writes. Cheap to
/// clone; clones share nothing and gate on the same (copied) configuration.
#[derive(Debug, Clone, Default)]
pub struct Console {
    config: OutputConfig,
}

impl Console {
    /// Create a new console with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// The configuration this console gates on
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Print user text to stdout, gated on the `user` level
    ///
    /// Prepends the `[host] ` prefix when a host is configured and appends
    /// a newline. Write failures are swallowed; use [`Console::puts_to`]
    /// to observe them.
    pub fn puts(&self, text: impl fmt::Display) {
        let _ = self.puts_to(&mut io::stdout().lock(), text, true, "\n", false);
    }

    /// `puts` with explicit prefix/terminator/flush control
    pub fn puts_with(&self, text: impl fmt::Display, show_prefix: bool, end: &str, flush: bool) {
        let _ = self.puts_to(&mut io::stdout().lock(), text, show_prefix, end, flush);
    }

    /// Write user text to an arbitrary writer, gated on the `user` level
    ///
    /// The `[host] ` prefix is written only when `show_prefix` is set AND
    /// the configuration carries a non-empty host. `end` is written after
    /// the text (pass `""` to suppress the line ending). When the `user`
    /// level is off this is a complete no-op, including the flush.
    pub fn puts_to<W: Write>(
        &self,
        out: &mut W,
        text: impl fmt::Display,
        show_prefix: bool,
        end: &str,
        flush: bool,
    ) -> io::Result<()> {
        if !self.config.levels.user {
            return Ok(());
        }

        if show_prefix {
            if let Some(host) = self.config.host() {
                write!(out, "[{host}] ")?;
            }
        }
        write!(out, "{text}{end}")?;

        if flush {
            out.flush()?;
        }
        Ok(())
    }

    /// Print text immediately, without prefix or line ending
    ///
    /// Preset of [`Console::puts_with`] for progress output written in
    /// tight loops (a sequence of dots, a spinner frame): no prefix, no
    /// terminator, flushed right away so it is not held back by stdout
    /// buffering. Subject to the same `user` level as `puts`.
    pub fn fastprint(&self, text: impl fmt::Display) {
        self.puts_with(text, false, "", true);
    }

    /// Writer-generic form of [`Console::fastprint`]
    pub fn fastprint_to<W: Write>(&self, out: &mut W, text: impl fmt::Display) -> io::Result<()> {
        self.puts_to(out, text, false, "", true)
    }

    /// Print a warning to stderr, gated on the `warnings` level
    ///
    /// Advisory only: returns normally and never terminates.
    pub fn warn(&self, msg: impl fmt::Display) {
        let _ = self.warn_to(&mut io::stderr().lock(), msg);
    }

    /// Writer-generic form of [`Console::warn`]
    pub fn warn_to<W: Write>(&self, err: &mut W, msg: impl fmt::Display) -> io::Result<()> {
        if self.config.levels.warnings {
            writeln!(err, "\nWarning: {msg}\n")?;
        }
        Ok(())
    }

    /// Request an execution abort
    ///
    /// Writes the two-line fatal report to stderr when the `aborts` level
    /// is on, then returns [`Error::Aborted`] unconditionally. The error
    /// propagates like any other `Err`, so callers may intercept it
    /// (see [`Error::is_abort`]) before the host's entry point converts it
    /// into a process exit with status 1.
    pub fn abort<T>(&self, msg: impl fmt::Display) -> Result<T> {
        self.abort_to(&mut io::stderr().lock(), msg)
    }

    /// Writer-generic form of [`Console::abort`]
    ///
    /// Report-write failures are swallowed: the termination value must be
    /// produced even when stderr is gone.
    pub fn abort_to<T, W: Write>(&self, err: &mut W, msg: impl fmt::Display) -> Result<T> {
        let msg = msg.to_string();
        tracing::debug!(%msg, "abort requested");
        if self.config.levels.aborts {
            let _ = writeln!(err, "\nFatal error: {msg}");
            let _ = writeln!(err, "\nAborting.");
        }
        Err(Error::Aborted(msg))
    }

    /// Abort if the configuration forbids interactive prompting
    ///
    /// Called by prompt sites before reading from the terminal. A no-op
    /// unless `abort_on_prompts` is set, in which case it aborts with a
    /// fixed message.
    pub fn handle_prompt_abort(&self) -> Result<()> {
        if self.config.abort_on_prompts {
            tracing::debug!("prompt requested while abort_on_prompts is set");
            return self.abort(PROMPT_ABORT_MSG);
        }
        Ok(())
    }
}
