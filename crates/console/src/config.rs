//! Output configuration
//!
//! This module defines the output-level gates and host context consulted by
//! every console write. The configuration is owned by the host application:
//! it is built once at startup (typically from CLI flags or the host's own
//! config file, which is why the types are serde-derived) and handed to
//! [`Console::new`](crate::Console::new). This crate never mutates it and
//! performs no file I/O of its own.

use serde::{Deserialize, Serialize};

/// Per-category output gates
///
/// Each flag controls whether one category of message is actually emitted.
/// All categories are on by default; a host typically clears `user` for a
/// `--quiet` run or `warnings` for scripted batch use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLevels {
    /// Emit the fatal-error report when an abort is requested
    #[serde(default = "default_true")]
    pub aborts: bool,

    /// Emit advisory warnings
    #[serde(default = "default_true")]
    pub warnings: bool,

    /// Emit user-facing text written through `puts`/`fastprint`
    #[serde(default = "default_true")]
    pub user: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputLevels {
    fn default() -> Self {
        Self {
            aborts: true,
            warnings: true,
            user: true,
        }
    }
}

/// Full output configuration for a [`Console`](crate::Console)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output-level gates
    #[serde(default)]
    pub levels: OutputLevels,

    /// Identifier of the current remote target, used as the `[host]` line
    /// prefix. `None` (or an empty string) means no host is active and no
    /// prefix is ever shown.
    #[serde(default)]
    pub host_string: Option<String>,

    /// Abort instead of prompting for interactive input
    #[serde(default)]
    pub abort_on_prompts: bool,
}

impl OutputConfig {
    /// The active host name, if one is set and non-empty
    pub fn host(&self) -> Option<&str> {
        self.host_string.as_deref().filter(|h| !h.is_empty())
    }
}
