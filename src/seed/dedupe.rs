// src/seed/dedupe.rs

use indexmap::IndexMap;
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

use super::types::{GroupDecision, GroupKey, RoleAssignmentRow, RowRef};
use crate::config::OutputOrder;

/// Rows that survive deduplication, plus one decision per group that had
/// more than one active row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    pub kept: Vec<RoleAssignmentRow>,
    pub decisions: Vec<GroupDecision>,
}

/// Order a group highest priority first; the sort is stable so the earliest
/// row wins a tie.
fn rank_group(group: &mut [RoleAssignmentRow]) {
    group.sort_by_key(|row| Reverse(row.role.priority()));
}

/// Keep every inactive row and one active row per (user, organization).
#[instrument(level = "debug", skip(rows), fields(rows = rows.len()))]
pub fn deduplicate(rows: Vec<RoleAssignmentRow>, order: OutputOrder) -> Deduplicated {
    let mut inactive = Vec::new();
    let mut groups: IndexMap<GroupKey, Vec<RoleAssignmentRow>> = IndexMap::new();

    for row in rows {
        if row.is_active {
            groups.entry(row.key()).or_default().push(row);
        } else {
            inactive.push(row);
        }
    }
    debug!(
        inactive = inactive.len(),
        groups = groups.len(),
        "partitioned rows"
    );

    let mut kept = inactive;
    let mut decisions = Vec::new();

    for (key, mut group) in groups {
        if group.len() == 1 {
            kept.extend(group);
            continue;
        }

        info!(
            "Found {} active roles for user {} in org {}",
            group.len(),
            key.user_id,
            key.organization_id
        );

        rank_group(&mut group);
        let survivor = group.remove(0);
        info!("  Keeping: {} (role: {})", survivor.id, survivor.role.as_str());
        for removed in &group {
            info!("  Removing: {} (role: {})", removed.id, removed.role.as_str());
        }

        decisions.push(GroupDecision {
            key,
            kept: RowRef::from(&survivor),
            removed: group.iter().map(RowRef::from).collect(),
        });
        kept.push(survivor);
    }

    if order == OutputOrder::Input {
        kept.sort_by_key(|row| row.position);
    }

    Deduplicated { kept, decisions }
}
