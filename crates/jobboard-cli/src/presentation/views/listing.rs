use std::fmt;

use jobboard_engine::{FeedSnapshot, PageSnapshot};
use jobboard_types::JobRecord;

use super::JobCardView;
use crate::presentation::Theme;

pub const LIST_HEADER: &str = "Tech Jobs in Victoria";

fn write_cards(f: &mut fmt::Formatter<'_>, jobs: &[JobRecord], theme: Theme) -> fmt::Result {
    for job in jobs {
        write!(f, "{}", JobCardView::new(job, theme))?;
        writeln!(f)?;
    }
    Ok(())
}

// --------------------------------------------------------
// Empty State
// --------------------------------------------------------

pub struct EmptyStateView {
    theme: Theme,
}

impl EmptyStateView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl fmt::Display for EmptyStateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.theme.title(LIST_HEADER))?;
        writeln!(f)?;
        writeln!(f, "{}", self.theme.muted("No jobs to show"))
    }
}

// --------------------------------------------------------
// Infinite Feed
// --------------------------------------------------------

pub struct FeedView<'a> {
    data: &'a FeedSnapshot<'a>,
    theme: Theme,
}

impl<'a> FeedView<'a> {
    pub fn new(data: &'a FeedSnapshot<'a>, theme: Theme) -> Self {
        Self { data, theme }
    }
}

impl fmt::Display for FeedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.total == 0 {
            return write!(f, "{}", EmptyStateView::new(self.theme));
        }

        writeln!(f, "{}", self.theme.title(LIST_HEADER))?;
        writeln!(f)?;
        write_cards(f, self.data.displayed, self.theme)?;

        if self.data.has_more {
            let remaining = self.data.total - self.data.displayed.len();
            writeln!(
                f,
                "{}",
                self.theme.muted(&format!(
                    "Showing {} of {} jobs ({} more: use --batches N or --all)",
                    self.data.displayed.len(),
                    self.data.total,
                    remaining
                ))
            )
        } else {
            writeln!(
                f,
                "{}",
                self.theme.muted("You've reached the end of all available jobs")
            )
        }
    }
}

// --------------------------------------------------------
// Paginated Listing
// --------------------------------------------------------

pub struct PageView<'a> {
    data: &'a PageSnapshot<'a>,
    theme: Theme,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageSnapshot<'a>, theme: Theme) -> Self {
        Self { data, theme }
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.total == 0 {
            return write!(f, "{}", EmptyStateView::new(self.theme));
        }

        writeln!(f, "{}", self.theme.title(LIST_HEADER))?;
        writeln!(f)?;
        write_cards(f, self.data.current_jobs, self.theme)?;

        if self.data.total_pages > 1 {
            writeln!(
                f,
                "{}",
                self.theme.muted(&format!(
                    "Page {} of {}",
                    self.data.current_page, self.data.total_pages
                ))
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_engine::{FeedConfig, InfiniteFeed, PaginatedFeed, WorkingSet};
    use jobboard_testing::{JobBuilder, descending_jobs};
    use std::time::Duration;

    fn config() -> FeedConfig {
        FeedConfig {
            load_more_delay: Duration::ZERO,
            ..FeedConfig::default()
        }
    }

    #[test]
    fn test_empty_feed_shows_empty_state() {
        let feed = InfiniteFeed::new(WorkingSet::default(), config());
        let snapshot = feed.snapshot();
        let rendered = FeedView::new(&snapshot, Theme::plain()).to_string();
        insta::assert_snapshot!(rendered, @r"
        Tech Jobs in Victoria

        No jobs to show
        ");
    }

    #[test]
    fn test_feed_footer_reports_remaining() {
        let working = WorkingSet::from_records(&descending_jobs(25, 1_000));
        let feed = InfiniteFeed::new(working, config());
        let snapshot = feed.snapshot();
        let rendered = FeedView::new(&snapshot, Theme::plain()).to_string();
        assert!(rendered.ends_with("Showing 12 of 25 jobs (13 more: use --batches N or --all)\n"));
        assert_eq!(rendered.matches("Posted ").count(), 12);
    }

    #[test]
    fn test_feed_footer_at_end() {
        let working = WorkingSet::from_records(&descending_jobs(3, 1_000));
        let feed = InfiniteFeed::new(working, config());
        let snapshot = feed.snapshot();
        let rendered = FeedView::new(&snapshot, Theme::plain()).to_string();
        assert!(rendered.ends_with("You've reached the end of all available jobs\n"));
    }

    #[test]
    fn test_single_page_has_no_footer() {
        let records = vec![
            JobBuilder::new(1556817073)
                .title("Rust Developer")
                .employer("Tidal Labs")
                .build(),
        ];
        let pager = PaginatedFeed::new(WorkingSet::from_records(&records), 10);
        let snapshot = pager.snapshot();
        let rendered = PageView::new(&snapshot, Theme::plain()).to_string();
        insta::assert_snapshot!(rendered, @r"
        Tech Jobs in Victoria

        Rust Developer
        Tidal Labs - Victoria, BC
        Salary not specified
        Posted May 2, 2019 | id 1556817073
        ");
    }

    #[test]
    fn test_page_footer_when_several_pages() {
        let working = WorkingSet::from_records(&descending_jobs(21, 1_000));
        let mut pager = PaginatedFeed::new(working, 10);
        pager.set_page(3);
        let snapshot = pager.snapshot();
        let rendered = PageView::new(&snapshot, Theme::plain()).to_string();
        assert!(rendered.ends_with("Page 3 of 3\n"));
        assert_eq!(rendered.matches("Posted ").count(), 1);
    }
}
