// src/seed/serialize.rs

use super::locate::Located;
use super::types::RoleAssignmentRow;
use crate::config::{TARGET_COLUMNS, TARGET_SCHEMA, TARGET_TABLE};

/// Rebuild the INSERT statement from the surviving rows, one tab-indented
/// tuple per line. An empty row set yields an empty string.
pub fn build_insert(rows: &[RoleAssignmentRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let columns = TARGET_COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    let tuples = rows
        .iter()
        .map(|row| format!("\t({})", row.original))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "INSERT INTO \"{}\".\"{}\" ({}) VALUES\n{};\n\n",
        TARGET_SCHEMA, TARGET_TABLE, columns, tuples
    )
}

/// Replace the located statement in `content` with `replacement`.
pub fn splice(content: &str, located: &Located<'_>, replacement: &str) -> String {
    let removed = located.end - located.start;
    let mut out = String::with_capacity(content.len() - removed + replacement.len());
    out.push_str(&content[..located.start]);
    out.push_str(replacement);
    out.push_str(&content[located.end..]);
    out
}
