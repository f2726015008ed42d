// Tunable theory settings, loaded from JSON.
//
// The core has very few knobs: which spelling table to use (automatic per
// tonic, or forced) and the pivot-search policy. They live in `TheoryConfig`
// so a shell can load them from a file and pass them down; the core never
// reads files itself. Missing fields fall back to the defaults below.
//
// See `cadenza_shell::config` for the file-level wrapper that adds export
// settings.

use crate::pitch::SpellingPreference;
use serde::{Deserialize, Serialize};

/// Hard ceiling on pivot results, whatever the configured cap.
pub const MAX_PIVOT_RESULTS: usize = 10;

/// Pivot-chord search policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    /// Minimum number of shared pitch classes for a chord pair to count.
    pub min_common_tones: usize,
    /// Cap on returned pairs; the search stops once this many are found.
    /// Values above `MAX_PIVOT_RESULTS` are treated as that ceiling.
    pub max_results: usize,
}

impl PivotConfig {
    /// The cap the search actually applies.
    pub fn result_cap(&self) -> usize {
        self.max_results.min(MAX_PIVOT_RESULTS)
    }
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            min_common_tones: 2,
            max_results: 10,
        }
    }
}

/// Top-level theory configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TheoryConfig {
    /// Spelling used for key pages. `auto` applies the circle-of-fifths rule.
    pub spelling: SpellingPreference,
    pub pivot: PivotConfig,
}

impl TheoryConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
