use serde::{Deserialize, Serialize};

/// Per-store settings, read from the `[store]` table of a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Name attached to every log event of the store (default: "store").
    #[serde(default = "default_name")]
    pub name: String,
    /// Emit a trace event with the state on every commit (default: false).
    #[serde(default)]
    pub trace_commits: bool,
    /// Emit a debug event when a dispatch matches no effect (default: true).
    #[serde(default = "default_log_unmatched")]
    pub log_unmatched: bool,
}

fn default_name() -> String {
    "store".to_string()
}

fn default_log_unmatched() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            trace_commits: false,
            log_unmatched: default_log_unmatched(),
        }
    }
}
