use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_PRIORITY_WEIGHT, MIN_PRIORITY_WEIGHT};
use crate::errors::ValidationError;

/// Priority weight, always within [1, 5].
/// 5 = critical, 1 = optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriorityWeight(u8);

impl PriorityWeight {
    pub const CRITICAL: Self = Self(5);
    pub const HIGH: Self = Self(4);
    pub const MEDIUM: Self = Self(3);
    pub const LOW: Self = Self(2);
    pub const OPTIONAL: Self = Self(1);

    /// Create a priority weight, rejecting values outside [1, 5].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (MIN_PRIORITY_WEIGHT..=MAX_PRIORITY_WEIGHT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::PriorityWeightOutOfRange {
                value: i64::from(value),
            })
        }
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> PriorityTier {
        match self.0 {
            5 => PriorityTier::Critical,
            4 => PriorityTier::High,
            3 => PriorityTier::Medium,
            2 => PriorityTier::Low,
            _ => PriorityTier::Optional,
        }
    }
}

impl Default for PriorityWeight {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<u8> for PriorityWeight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriorityWeight> for u8 {
    fn from(p: PriorityWeight) -> Self {
        p.0
    }
}

impl fmt::Display for PriorityWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named priority tiers (5 → critical … 1 → optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Optional,
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityTier {
    /// All tiers, highest first.
    pub const ALL: [PriorityTier; 5] = [
        PriorityTier::Critical,
        PriorityTier::High,
        PriorityTier::Medium,
        PriorityTier::Low,
        PriorityTier::Optional,
    ];

    pub fn weight(self) -> PriorityWeight {
        match self {
            Self::Critical => PriorityWeight::CRITICAL,
            Self::High => PriorityWeight::HIGH,
            Self::Medium => PriorityWeight::MEDIUM,
            Self::Low => PriorityWeight::LOW,
            Self::Optional => PriorityWeight::OPTIONAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count of selected questions per priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDistribution {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub optional: usize,
}

impl PriorityDistribution {
    /// Tally priorities into tiers.
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = PriorityWeight>,
    {
        let mut dist = Self::default();
        for w in weights {
            dist.record(w.tier());
        }
        dist
    }

    pub fn record(&mut self, tier: PriorityTier) {
        *self.slot_mut(tier) += 1;
    }

    pub fn count(&self, tier: PriorityTier) -> usize {
        match tier {
            PriorityTier::Critical => self.critical,
            PriorityTier::High => self.high,
            PriorityTier::Medium => self.medium,
            PriorityTier::Low => self.low,
            PriorityTier::Optional => self.optional,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.optional
    }

    fn slot_mut(&mut self, tier: PriorityTier) -> &mut usize {
        match tier {
            PriorityTier::Critical => &mut self.critical,
            PriorityTier::High => &mut self.high,
            PriorityTier::Medium => &mut self.medium,
            PriorityTier::Low => &mut self.low,
            PriorityTier::Optional => &mut self.optional,
        }
    }
}
