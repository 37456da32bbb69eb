// src/seed/types.rs

use serde::Serialize;

use super::role::Role;

/// One parsed tuple of the `user_organization_roles` INSERT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentRow {
    pub id: String,
    pub user_id: String,
    pub organization_id: String,
    pub role_id: String,
    pub role: Role,
    pub is_active: bool,
    /// Columns after `is_active`, kept as literal SQL text.
    pub extra: Vec<String>,
    /// Row body between the outer parentheses, emitted verbatim.
    pub original: String,
    /// Index of the tuple in the VALUES list, malformed tuples included.
    pub position: usize,
}

impl RoleAssignmentRow {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            user_id: self.user_id.clone(),
            organization_id: self.organization_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupKey {
    pub user_id: String,
    pub organization_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRef {
    pub id: String,
    pub role: String,
}

impl From<&RoleAssignmentRow> for RowRef {
    fn from(row: &RoleAssignmentRow) -> Self {
        RowRef {
            id: row.id.clone(),
            role: row.role.as_str().to_string(),
        }
    }
}

/// Outcome for a (user, organization) group that had several active rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDecision {
    #[serde(flatten)]
    pub key: GroupKey,
    pub kept: RowRef,
    pub removed: Vec<RowRef>,
}

/// Counts for one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    /// Tuples found in the VALUES list, malformed ones included.
    pub total: usize,
    pub parsed: usize,
    pub malformed: usize,
    pub kept: usize,
    pub removed: usize,
    pub decisions: Vec<GroupDecision>,
}

impl CleanSummary {
    pub fn has_duplicates(&self) -> bool {
        !self.decisions.is_empty()
    }
}
