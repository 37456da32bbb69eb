// src/seed/mod.rs

pub mod dedupe;
pub mod locate;
pub mod parse;
pub mod role;
pub mod serialize;
pub mod types;

pub use dedupe::{deduplicate, Deduplicated};
pub use locate::{locate_insert, Located};
pub use parse::{parse_rows, ParsedRows};
pub use role::Role;
pub use serialize::{build_insert, splice};
pub use types::{CleanSummary, GroupDecision, GroupKey, RoleAssignmentRow, RowRef};

use tracing::{info, instrument};

use crate::config::CleanOptions;
use crate::error::Result;

/// Rewritten seed text and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub content: String,
    pub summary: CleanSummary,
}

fn summarize(parsed: &ParsedRows, deduped: &Deduplicated) -> CleanSummary {
    CleanSummary {
        total: parsed.total,
        parsed: parsed.rows.len(),
        malformed: parsed.malformed,
        kept: deduped.kept.len(),
        removed: parsed.total - deduped.kept.len(),
        decisions: deduped.decisions.clone(),
    }
}

/// Locate, parse, deduplicate and re-serialize the role assignment INSERT.
/// Text outside the statement passes through unchanged.
#[instrument(level = "debug", skip(content, options), fields(content_len = content.len()))]
pub fn clean_seed(content: &str, options: &CleanOptions) -> Result<Cleaned> {
    info!("Extracting user_organization_roles data...");
    let located = locate_insert(content)?;

    info!("Parsing role entries...");
    let parsed = parse_rows(located.values);
    info!("Found {} total entries", parsed.total);

    info!("Deduplicating entries...");
    let deduped = deduplicate(parsed.rows.clone(), options.order);
    info!("Kept {} entries after deduplication", deduped.kept.len());

    info!("Rebuilding INSERT statement...");
    let statement = build_insert(&deduped.kept);
    let content = splice(content, &located, &statement);

    Ok(Cleaned {
        content,
        summary: summarize(&parsed, &deduped),
    })
}

/// Same analysis as [`clean_seed`] without rebuilding the text.
pub fn check_seed(content: &str) -> Result<CleanSummary> {
    let located = locate_insert(content)?;
    let parsed = parse_rows(located.values);
    let deduped = deduplicate(parsed.rows.clone(), CleanOptions::default().order);
    Ok(summarize(&parsed, &deduped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputOrder;
    use crate::error::SeedError;
    use tracing_subscriber::{fmt, EnvFilter};

    const USER: &str = "1663d9f0-7b1e-417d-9349-4f2e19b6d1e8";
    const TENANT_ADMIN: &str = "700b7f8d-be79-474e-b554-6886a3605277";
    const SUPER_ADMIN: &str = "86234569-43e9-4a18-83cf-f8584d84a752";
    const HEADER: &str = "INSERT INTO \"public\".\"user_organization_roles\" (\"id\", \"user_id\", \"organization_id\", \"role_id\", \"is_active\", \"created_at\", \"updated_at\", \"created_by\", \"updated_by\") VALUES\n";

    fn init_logging() {
        let _ = fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    }

    fn tuple(id: &str, user: &str, org: &str, role: &str, active: bool) -> String {
        format!(
            "'{}', '{}', '{}', '{}', {}, '2024-01-01 00:00:00+00', '2024-01-01 00:00:00+00', NULL, NULL",
            id, user, org, role, active
        )
    }

    fn seed(tuples: &[String]) -> String {
        let body = tuples
            .iter()
            .map(|t| format!("\t({})", t))
            .collect::<Vec<_>>()
            .join(",\n");
        format!(
            "-- seed\nINSERT INTO \"public\".\"roles\" (\"id\") VALUES ('r');\n\n{}{};\n\nSELECT 1;\n",
            HEADER, body
        )
    }

    fn sample() -> String {
        seed(&[
            tuple("r1", "U", "O", USER, true),
            tuple("r2", "U", "O", TENANT_ADMIN, true),
            tuple("r3", "U", "O", USER, false),
            tuple("r4", "U", "O", SUPER_ADMIN, true),
            tuple("r5", "V", "O", USER, true),
            tuple("r6", "V", "P", TENANT_ADMIN, false),
        ])
    }

    #[test]
    fn keeps_super_admin_and_everything_else() {
        init_logging();
        let cleaned = clean_seed(&sample(), &CleanOptions::default()).unwrap();

        let expected = seed(&[
            tuple("r3", "U", "O", USER, false),
            tuple("r6", "V", "P", TENANT_ADMIN, false),
            tuple("r4", "U", "O", SUPER_ADMIN, true),
            tuple("r5", "V", "O", USER, true),
        ]);
        assert_eq!(cleaned.content, expected);

        let s = &cleaned.summary;
        assert_eq!((s.total, s.parsed, s.malformed), (6, 6, 0));
        assert_eq!((s.kept, s.removed), (4, 2));
        assert_eq!(s.decisions.len(), 1);
        assert_eq!(s.decisions[0].kept.id, "r4");
        let removed: Vec<_> = s.decisions[0].removed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(removed, vec!["r2", "r1"]);
    }

    #[test]
    fn input_order_option_keeps_original_sequence() {
        let options = CleanOptions {
            order: OutputOrder::Input,
        };
        let cleaned = clean_seed(&sample(), &options).unwrap();
        let expected = seed(&[
            tuple("r3", "U", "O", USER, false),
            tuple("r4", "U", "O", SUPER_ADMIN, true),
            tuple("r5", "V", "O", USER, true),
            tuple("r6", "V", "P", TENANT_ADMIN, false),
        ]);
        assert_eq!(cleaned.content, expected);
    }

    #[test]
    fn second_run_removes_nothing() {
        let first = clean_seed(&sample(), &CleanOptions::default()).unwrap();
        let second = clean_seed(&first.content, &CleanOptions::default()).unwrap();
        assert_eq!(second.summary.removed, 0);
        assert!(second.summary.decisions.is_empty());
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn malformed_tuple_is_dropped_not_fatal() {
        let content = seed(&[
            tuple("r1", "U", "O", USER, true),
            "'bad', 'U', 'O', 'x'".to_string(),
        ]);
        let cleaned = clean_seed(&content, &CleanOptions::default()).unwrap();
        assert_eq!(cleaned.summary.malformed, 1);
        assert_eq!(cleaned.summary.removed, 1);
        assert!(!cleaned.content.contains("'bad'"));
        assert!(cleaned.content.contains("'r1'"));
    }

    #[test]
    fn missing_statement_fails() {
        let err = clean_seed("SELECT 1;\n\n", &CleanOptions::default()).unwrap_err();
        assert!(matches!(err, SeedError::NotFound { .. }));
    }

    #[test]
    fn check_reports_duplicates_without_rewriting() {
        let summary = check_seed(&sample()).unwrap();
        assert!(summary.has_duplicates());
        assert_eq!(summary.removed, 2);
    }
}
