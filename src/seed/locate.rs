// src/seed/locate.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::config::{TARGET_SCHEMA, TARGET_TABLE};
use crate::error::{Result, SeedError};

/// `INSERT INTO "public"."user_organization_roles" ... VALUES <payload>;` up to
/// and including the blank line that ends the statement.
static TARGET_INSERT: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"(?s)INSERT\s+INTO\s+"{}"\."{}".*?VALUES\s*(.*?);\s*\n\n"#,
        regex::escape(TARGET_SCHEMA),
        regex::escape(TARGET_TABLE),
    );
    Regex::new(&pattern).expect("target INSERT pattern should compile")
});

/// Byte range of the target statement and its VALUES payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'a> {
    pub start: usize,
    pub end: usize,
    pub values: &'a str,
}

/// Find the first INSERT into the target table.
#[instrument(level = "debug", skip(content), fields(content_len = content.len()))]
pub fn locate_insert(content: &str) -> Result<Located<'_>> {
    let caps = TARGET_INSERT.captures(content).ok_or_else(|| {
        warn!(table = TARGET_TABLE, "target INSERT statement not found");
        SeedError::NotFound {
            table: TARGET_TABLE.to_string(),
        }
    })?;

    // group 0 and 1 always participate in a match
    let whole = caps.get(0).ok_or_else(|| SeedError::NotFound {
        table: TARGET_TABLE.to_string(),
    })?;
    let values = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    debug!(
        start = whole.start(),
        end = whole.end(),
        values_len = values.len(),
        "located target INSERT"
    );
    Ok(Located {
        start: whole.start(),
        end: whole.end(),
        values,
    })
}
