//! Configuration for a search run

use serde::{Deserialize, Serialize};

pub const DEFAULT_MATCH_PERCENT: u32 = 75;
pub const DEFAULT_TOLERANCE: u32 = 32;

/// How the search image is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Black pixels are background, everything else must differ from the background.
    Mask,
    /// Search image pixels are compared directly against the window.
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Net match percentage a window must exceed to count as an occurrence
    pub match_percent: u32,
    /// Exclusive per-channel difference for two colours to be "close"
    pub tolerance: u32,
    pub mode: SearchMode,
    /// Scan rows on the rayon pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_percent: DEFAULT_MATCH_PERCENT,
            tolerance: DEFAULT_TOLERANCE,
            mode: SearchMode::Mask,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_match_percent(mut self, match_percent: u32) -> Self {
        self.match_percent = match_percent;
        self
    }

    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
