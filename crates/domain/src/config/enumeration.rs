use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnumerationConfig {
    /// Treat differently-cased hostnames as the same entry when merging
    /// tool output (default: false).
    ///
    /// DNS names are case-insensitive, but the historical behavior of this
    /// service deduplicates by exact byte identity, so `Foo.example.com`
    /// and `foo.example.com` both survive. Flip this on to collapse them.
    #[serde(default)]
    pub fold_case: bool,

    /// Maximum number of requests allowed to run the external tools at the
    /// same time (default: 4). Each enumeration spawns two child processes.
    #[serde(default = "default_max_concurrent_scans")]
    pub max_concurrent_scans: usize,
}

fn default_max_concurrent_scans() -> usize {
    4
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            fold_case: false,
            max_concurrent_scans: default_max_concurrent_scans(),
        }
    }
}
