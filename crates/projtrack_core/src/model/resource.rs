//! Resource domain model and cost derivation.
//!
//! # Responsibility
//! - Define resource rows and the total-cost derivation they carry.
//!
//! # Invariants
//! - `total_cost` is always `unit_cost * quantity`; the stored column is
//!   recomputed by every write path and never caller-supplied.

use super::project::ProjectId;
use super::{ensure_amount, ensure_required, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned resource identifier.
pub type ResourceId = i64;

/// What kind of thing the resource is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Human,
    Material,
    Financial,
    Technical,
    Informational,
}

impl ResourceKind {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Material => "material",
            Self::Financial => "financial",
            Self::Technical => "technical",
            Self::Informational => "informational",
        }
    }

    /// Unknown labels degrade to `Human` instead of failing the read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "human" => Self::Human,
            "material" => Self::Material,
            "financial" => Self::Financial,
            "technical" => Self::Technical,
            "informational" => Self::Informational,
            _ => Self::Human,
        }
    }
}

/// How much of the resource can currently be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Partial,
    Unavailable,
}

impl Availability {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Partial => "partial",
            Self::Unavailable => "unavailable",
        }
    }

    /// Unknown labels degrade to `Available` instead of failing the read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "available" => Self::Available,
            "partial" => Self::Partial,
            "unavailable" => Self::Unavailable,
            _ => Self::Available,
        }
    }
}

/// Full resource row as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub project_id: ProjectId,
    pub name: String,
    pub kind: ResourceKind,
    pub unit_cost: f64,
    pub quantity: i64,
    /// Derived: `unit_cost * quantity` at the time of the last write.
    pub total_cost: f64,
    pub availability: Availability,
}

/// Caller-supplied fields for resource create/update. Carries no total cost;
/// the write path derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResource {
    pub project_id: ProjectId,
    pub name: String,
    pub kind: ResourceKind,
    pub unit_cost: f64,
    pub quantity: i64,
    pub availability: Availability,
}

impl NewResource {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_required("resource", "name", &self.name)?;
        ensure_amount("resource", "unit_cost", self.unit_cost)?;
        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity(self.quantity));
        }
        Ok(())
    }
}

/// Total cost derivation shared by create and update paths.
pub fn total_cost_of(unit_cost: f64, quantity: i64) -> f64 {
    unit_cost * quantity as f64
}
