// src/main.rs

use anyhow::{Context, Result};
use seedclean::{clean_seed, io, CleanOptions, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    let config = Config::default();

    // ─── 2) read seed ────────────────────────────────────────────────
    info!("Reading {}...", config.input.display());
    let content = io::read_seed(&config.input).context("could not read seed file")?;

    // ─── 3) dedupe role assignments ──────────────────────────────────
    let cleaned = clean_seed(&content, &CleanOptions::default())
        .context("could not find user_organization_roles data")?;

    // ─── 4) write cleaned copy ───────────────────────────────────────
    info!("Writing cleaned data to {}...", config.output.display());
    io::write_seed_atomic(&config.output, &cleaned.content)
        .context("could not write cleaned seed file")?;

    let summary = &cleaned.summary;
    info!("✅ Cleanup completed successfully!");
    info!("Original entries: {}", summary.total);
    info!("Cleaned entries: {}", summary.kept);
    info!("Removed duplicates: {}", summary.removed);
    if summary.malformed > 0 {
        info!("Dropped malformed entries: {}", summary.malformed);
    }
    Ok(())
}
