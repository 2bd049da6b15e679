use serde::{Deserialize, Serialize};

/// The user's daily intake target, in fluid ounces. Only ever used as the
/// denominator of the goal-completion statistic, so it must be a positive
/// finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoal(f64);

impl DailyGoal {
    /// Default target shipped with the app.
    pub const DEFAULT_OZ: f64 = 100.0;

    pub fn new(oz: f64) -> Option<Self> {
        (oz.is_finite() && oz > 0.0).then_some(Self(oz))
    }

    pub fn oz(&self) -> f64 {
        self.0
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self(Self::DEFAULT_OZ)
    }
}
