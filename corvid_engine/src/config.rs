//! The mutable set of UCI-tunable parameters a running engine holds between searches.

use consts::DEFAULT_TT_SIZE;

pub const DEFAULT_THREADS: usize = 1;

/// Holds the current hash size and worker thread count, as last set via `setoption`.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub hash_mb: usize,
    pub threads: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        EngineConfig {
            hash_mb: DEFAULT_TT_SIZE,
            threads: DEFAULT_THREADS,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::new()
    }
}
