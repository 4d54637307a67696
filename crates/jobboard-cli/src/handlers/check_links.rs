use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use jobboard_providers::{LinkCheckOptions, LinkChecker, read_records_file, write_records_file};

use crate::presentation::views::LinkCheckSummaryView;
use crate::presentation::{Theme, print_view};

pub struct CheckLinksArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub timeout_secs: u64,
    pub pause_ms: u64,
}

/// Probe every posting's link and prune the dead ones.
///
/// Writes back to the input file unless `--output` is given. Nothing is
/// written on a dry run or when no posting survives.
pub async fn handle(args: CheckLinksArgs) -> Result<()> {
    let input = args.input;
    let records = read_records_file(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let checker = LinkChecker::new(LinkCheckOptions {
        timeout: Duration::from_secs(args.timeout_secs),
        pause: Duration::from_millis(args.pause_ms),
    })?;
    let report = checker.check_records(records).await;

    for removed in &report.removed {
        tracing::info!(
            "Removed: {} at {}",
            removed.job_title,
            removed.employer_name
        );
    }

    let target = args.output.unwrap_or(input);
    let written = if args.dry_run {
        None
    } else if report.kept.is_empty() {
        tracing::warn!("No postings left after the link check; leaving data untouched");
        None
    } else {
        write_records_file(&target, &report.kept)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        Some(target.as_path())
    };

    print_view(LinkCheckSummaryView::new(&report.stats, written, Theme::detect()));
    Ok(())
}
