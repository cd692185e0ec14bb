//! Domain model for the five tracked entity types.
//!
//! # Responsibility
//! - Define canonical entity structs, their status enumerations, and the
//!   draft (`New*`) structs accepted by write paths.
//! - Host write-path validation shared by all repositories.
//!
//! # Invariants
//! - Entity ids are store-assigned; drafts never carry one.
//! - Derived fields (resource total cost, risk level) exist only on read
//!   models, never on drafts.
//! - Stored enum labels are snake_case tokens; `from_label` readers are
//!   total, degrading unknown labels to a documented default variant.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project;
pub mod resource;
pub mod risk;
pub mod stakeholder;
pub mod task;

/// Write-path validation failure. Rejecting the write leaves the store
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required text field is blank after trim.
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    /// Money amount is negative, NaN, or infinite.
    InvalidAmount {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },
    /// Quantity below zero.
    NegativeQuantity(i64),
    /// Progress percentage above 100.
    ProgressOutOfRange(u8),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{entity} {field} must not be blank")
            }
            Self::InvalidAmount {
                entity,
                field,
                value,
            } => write!(f, "{entity} {field} must be a non-negative amount, got {value}"),
            Self::NegativeQuantity(value) => {
                write!(f, "quantity must not be negative, got {value}")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress must be within 0..=100, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Shared priority scale for projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Unknown labels degrade to `Medium` instead of failing the read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

pub(crate) fn ensure_required(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { entity, field });
    }
    Ok(())
}

pub(crate) fn ensure_amount(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount {
            entity,
            field,
            value,
        });
    }
    Ok(())
}
