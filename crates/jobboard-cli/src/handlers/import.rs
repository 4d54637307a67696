use std::path::Path;

use anyhow::{Context, Result};
use jobboard_providers::{import_csv_file, write_records_file};

use crate::presentation::views::ImportSummaryView;
use crate::presentation::{Theme, print_view};

/// Convert the survey export into the published data file.
pub fn handle(input: &Path, output: &Path) -> Result<()> {
    let records = import_csv_file(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    write_records_file(output, &records)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_view(ImportSummaryView::new(records.len(), output, Theme::detect()));
    Ok(())
}
