// src/config.rs

use std::path::PathBuf;

/// Seed file read by the maintenance script.
pub const DEFAULT_INPUT: &str = "supabase/seed.sql";
/// Sibling file the cleaned seed is written to.
pub const DEFAULT_OUTPUT: &str = "supabase/seed_cleaned.sql";

pub const TARGET_SCHEMA: &str = "public";
pub const TARGET_TABLE: &str = "user_organization_roles";

/// Column list of the rebuilt INSERT, in order.
pub const TARGET_COLUMNS: &[&str] = &[
    "id",
    "user_id",
    "organization_id",
    "role_id",
    "is_active",
    "created_at",
    "updated_at",
    "created_by",
    "updated_by",
];

/// Fixed locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// How surviving rows are ordered in the rebuilt statement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputOrder {
    /// Inactive rows in encounter order, then one survivor per group in
    /// first-seen group order.
    #[default]
    Grouped,
    /// Survivors in their original input order.
    Input,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanOptions {
    pub order: OutputOrder,
}
