//! Stakeholder domain model. Plain contact/engagement rows with no derived
//! fields; all descriptive fields are free text.

use super::project::ProjectId;
use super::{ensure_required, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned stakeholder identifier.
pub type StakeholderId = i64;

/// Full stakeholder row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: StakeholderId,
    pub project_id: ProjectId,
    pub name: String,
    pub role: String,
    pub influence: String,
    pub interest: String,
    pub communication_plan: String,
}

/// Caller-supplied fields for stakeholder create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStakeholder {
    pub project_id: ProjectId,
    pub name: String,
    pub role: String,
    pub influence: String,
    pub interest: String,
    pub communication_plan: String,
}

impl NewStakeholder {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_required("stakeholder", "name", &self.name)
    }
}
