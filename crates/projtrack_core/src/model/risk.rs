//! Risk domain model and classification.
//!
//! # Responsibility
//! - Define risk rows and the probability/impact rating enumerations.
//! - Classify (probability, impact) pairs into a risk level.
//!
//! # Invariants
//! - `risk_score` and `RiskLevel::classify` are pure, total, and
//!   deterministic.
//! - The stored level column is re-derived by every write path; drafts carry
//!   no level field.

use super::project::ProjectId;
use super::{ensure_required, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned risk identifier.
pub type RiskId = i64;

/// How likely the risk is to occur. Weight 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Probability {
    Low,
    Medium,
    High,
}

impl Probability {
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Unknown labels degrade to `Low` (weight 1) instead of failing the
    /// read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Low,
        }
    }
}

/// How badly the risk would hurt if it occurred. Weight 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Unknown labels degrade to `Low` (weight 1) instead of failing the
    /// read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Low,
        }
    }
}

/// Classified exposure bucket derived from probability and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Buckets the 1..=9 score: <=2 low, 3..=4 moderate, >=5 high.
    pub fn classify(probability: Probability, impact: Impact) -> Self {
        match risk_score(probability, impact) {
            0..=2 => Self::Low,
            3..=4 => Self::Moderate,
            _ => Self::High,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Returns `None` on an unknown label so the caller can re-derive the
    /// level from probability and impact.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Probability weight times impact weight, integer 1..=9.
pub fn risk_score(probability: Probability, impact: Impact) -> u8 {
    probability.weight() * impact.weight()
}

/// Tracking state of a risk register entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Identified,
    Monitored,
    Mitigated,
    Realized,
}

impl RiskStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Identified => "identified",
            Self::Monitored => "monitored",
            Self::Mitigated => "mitigated",
            Self::Realized => "realized",
        }
    }

    /// Unknown labels degrade to `Identified` instead of failing the read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "identified" => Self::Identified,
            "monitored" => Self::Monitored,
            "mitigated" => Self::Mitigated,
            "realized" => Self::Realized,
            _ => Self::Identified,
        }
    }
}

/// Full risk row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: RiskId,
    pub project_id: ProjectId,
    pub description: String,
    pub probability: Probability,
    pub impact: Impact,
    /// Derived: `RiskLevel::classify(probability, impact)` at the time of
    /// the last write.
    pub level: RiskLevel,
    pub mitigation: String,
    pub status: RiskStatus,
}

/// Caller-supplied fields for risk create/update. Carries no level; the
/// write path derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRisk {
    pub project_id: ProjectId,
    pub description: String,
    pub probability: Probability,
    pub impact: Impact,
    pub mitigation: String,
    pub status: RiskStatus,
}

impl NewRisk {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_required("risk", "description", &self.description)?;
        Ok(())
    }
}
