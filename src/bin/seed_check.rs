// src/bin/seed_check.rs

use anyhow::{Context, Result};
use glob::glob;
use seedclean::{check_seed, io, seed::CleanSummary, SeedError};
use serde::Serialize;
use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_PATTERN: &str = "supabase/seed*.sql";

#[derive(Serialize)]
struct Report<'a> {
    path: String,
    #[serde(flatten)]
    summary: &'a CleanSummary,
}

/// Returns true when the file holds duplicate active role assignments.
fn check_file(path: &Path) -> Result<bool> {
    let content = io::read_seed(path)?;
    let summary = match check_seed(&content) {
        Ok(summary) => summary,
        Err(SeedError::NotFound { table }) => {
            warn!(path = %path.display(), table = %table, "no target statement; skipping");
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let report = Report {
        path: path.display().to_string(),
        summary: &summary,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(summary.has_duplicates())
}

/// Expand `pattern`, logging entries that could not be read. Returns the
/// matched paths and the number of unreadable entries.
fn matching_paths(pattern: &str) -> Result<(Vec<PathBuf>, usize)> {
    let mut paths = Vec::new();
    let mut unreadable = 0;
    let entries =
        glob(pattern).with_context(|| format!("Failed to read glob pattern '{}'", pattern))?;
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => {
                warn!(path = %e.path().display(), "unreadable while matching: {}", e.error());
                unreadable += 1;
            }
        }
    }
    Ok((paths, unreadable))
}

fn main() -> Result<ExitCode> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pattern = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PATTERN.to_string());

    let (paths, unreadable) = matching_paths(&pattern)?;
    let mut failed = unreadable > 0;
    if paths.is_empty() && !failed {
        return Err(anyhow::anyhow!("No seed files found under '{}'", pattern));
    }

    for path in &paths {
        match check_file(path) {
            Ok(true) => {
                info!(path = %path.display(), "duplicate active roles found");
                failed = true;
            }
            Ok(false) => {}
            Err(e) => {
                error!(path = %path.display(), "check failed: {:#}", e);
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
