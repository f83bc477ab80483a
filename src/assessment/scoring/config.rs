use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIORITY_LIMIT: usize = 5;

/// Knobs applied when turning a score report into its summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// How many domains the priority list shows.
    pub priority_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            priority_limit: DEFAULT_PRIORITY_LIMIT,
        }
    }
}
