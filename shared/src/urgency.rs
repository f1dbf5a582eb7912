//! Urgency classification
//!
//! One step function of days-remaining, shared by the banner and every
//! category that opts into showing an urgency tag.

use serde::{Deserialize, Serialize};

/// Ordinal urgency bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Classify days-remaining with strict breakpoints at 90 / 60 / 30
    ///
    /// Exactly 90 days is already Medium, exactly 30 already Critical.
    pub fn from_days_remaining(days: i64) -> Self {
        if days > 90 {
            Urgency::Low
        } else if days > 60 {
            Urgency::Medium
        } else if days > 30 {
            Urgency::High
        } else {
            Urgency::Critical
        }
    }

    /// Label shown on urgency badges
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Critical => "Critical",
        }
    }
}
