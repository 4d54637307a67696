use std::fmt;
use std::path::Path;

use jobboard_providers::LinkCheckStats;

use crate::presentation::Theme;

pub struct ImportSummaryView<'a> {
    count: usize,
    output: &'a Path,
    theme: Theme,
}

impl<'a> ImportSummaryView<'a> {
    pub fn new(count: usize, output: &'a Path, theme: Theme) -> Self {
        Self {
            count,
            output,
            theme,
        }
    }
}

impl fmt::Display for ImportSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Converted {} job postings to {}",
            self.theme.title(&self.count.to_string()),
            self.output.display()
        )
    }
}

pub struct LinkCheckSummaryView<'a> {
    stats: &'a LinkCheckStats,
    /// Where the kept records went; `None` for a dry run or nothing kept
    written_to: Option<&'a Path>,
    theme: Theme,
}

impl<'a> LinkCheckSummaryView<'a> {
    pub fn new(stats: &'a LinkCheckStats, written_to: Option<&'a Path>, theme: Theme) -> Self {
        Self {
            stats,
            written_to,
            theme,
        }
    }
}

impl fmt::Display for LinkCheckSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "{}", self.theme.heading("Link check summary"))?;
        writeln!(f, "  Total jobs:       {}", s.total)?;
        writeln!(f, "  Active links:     {}", self.theme.salary(&s.active.to_string()))?;
        writeln!(f, "  Inactive links:   {}", self.theme.warning(&s.inactive.to_string()))?;
        writeln!(f, "  Empty links:      {}", s.empty)?;
        writeln!(f, "  Redirected links: {}", s.redirected)?;
        writeln!(f, "  Jobs kept:        {}", s.total - s.inactive)?;

        match self.written_to {
            Some(path) => writeln!(f, "Wrote updated data to {}", path.display()),
            None => writeln!(f, "{}", self.theme.muted("No file written")),
        }
    }
}
