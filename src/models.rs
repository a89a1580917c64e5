//! Frontend Models
//!
//! Task records and the derived storage usage snapshot.

use serde::{Deserialize, Serialize};

/// A single to-do entry. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Task {
    /// New, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_completed: false,
        }
    }
}

/// Severity of storage usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Tier {
    /// Gauge fill color
    pub fn color(self) -> &'static str {
        match self {
            Tier::Normal => "#4caf50",
            Tier::Warning => "#ff9800",
            Tier::Critical => "#f44336",
        }
    }
}

/// Storage usage derived from the whole store after a save
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsageSnapshot {
    /// Estimated bytes in use, never clamped
    pub total_bytes: u64,
    /// Display percentage, clamped to 0..=100
    pub percentage: f64,
    pub tier: Tier,
    /// Text shown next to the gauge
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_has_its_own_color() {
        assert_eq!(Tier::Normal.color(), "#4caf50");
        assert_eq!(Tier::Warning.color(), "#ff9800");
        assert_eq!(Tier::Critical.color(), "#f44336");
        assert_eq!(Tier::default(), Tier::Normal);
    }
}
