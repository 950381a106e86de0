//! Search options shared by all strategies.

/// Knobs for one search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// When two routes tie on the primary metric, prefer the one with the
    /// better secondary metric. Off by default, matching the solver's
    /// plain behaviour.
    pub secondary_optimization: bool,
}

impl SearchOptions {
    /// Options with secondary optimization switched on.
    pub fn with_secondary() -> Self {
        Self {
            secondary_optimization: true,
        }
    }
}
