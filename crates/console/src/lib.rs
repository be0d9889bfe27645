//! rex-console: Output and formatting utilities for the rex remote-execution CLI
//!
//! This crate provides the presentation surface shared by the rex binaries:
//! - Output-level configuration (which message categories are emitted)
//! - A gated console writer with `[host]` prefixing
//! - Fatal/advisory reporting, with aborts modeled as a typed error value
//! - Human-readable byte-size and duration formatting
//! - Multi-line text indentation
//!
//! An abort never exits the process directly. [`Console::abort`] returns
//! [`Error::Aborted`], which propagates with `?` like any other error and
//! can be intercepted anywhere on the way up; the binary's entry point is
//! responsible for turning an uncaught error into
//! `std::process::exit(err.exit_code())`.

pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod text;

pub use config::{OutputConfig, OutputLevels};
pub use console::Console;
pub use error::{Error, Result};
pub use format::{human_readable_duration, human_readable_seconds, human_readable_size};
pub use text::{indent, indent_lines};
