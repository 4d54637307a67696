use jobboard_types::JobRecord;
use serde::Serialize;

use crate::{LIST_PAGE_SIZE, WorkingSet};

/// Fixed-size pages over a working set, 1-based.
#[derive(Debug, Clone)]
pub struct PaginatedFeed {
    working: WorkingSet,
    page_size: usize,
    current_page: usize,
}

impl PaginatedFeed {
    pub fn new(working: WorkingSet, page_size: usize) -> Self {
        Self {
            working,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn with_default_size(working: WorkingSet) -> Self {
        Self::new(working, LIST_PAGE_SIZE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty working set.
    pub fn total_pages(&self) -> usize {
        self.working.len().div_ceil(self.page_size)
    }

    /// Records on page `n`.
    ///
    /// Pages outside `1..=total_pages` are empty; callers clamp with
    /// [`total_pages`](Self::total_pages).
    pub fn page(&self, n: usize) -> &[JobRecord] {
        if n == 0 {
            return &[];
        }
        let start = (n - 1).saturating_mul(self.page_size).min(self.working.len());
        let end = start.saturating_add(self.page_size).min(self.working.len());
        &self.working[start..end]
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Move to page `n`, clamped into `1..=total_pages` (page 1 when empty).
    pub fn set_page(&mut self, n: usize) -> usize {
        self.current_page = n.clamp(1, self.total_pages().max(1));
        self.current_page
    }

    pub fn current_jobs(&self) -> &[JobRecord] {
        self.page(self.current_page)
    }

    /// Plain-data view for presentation layers
    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot {
            current_jobs: self.current_jobs(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total: self.working.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot<'a> {
    pub current_jobs: &'a [JobRecord],
    pub current_page: usize,
    pub total_pages: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_testing::descending_jobs;

    fn pager(count: usize) -> PaginatedFeed {
        PaginatedFeed::with_default_size(WorkingSet::from_records(&descending_jobs(count, 1_000)))
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(pager(0).total_pages(), 0);
        assert_eq!(pager(1).total_pages(), 1);
        assert_eq!(pager(10).total_pages(), 1);
        assert_eq!(pager(11).total_pages(), 2);
        assert_eq!(pager(25).total_pages(), 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let p = pager(25);
        assert_eq!(p.page(3).len(), 5);
        assert_eq!(p.page(3)[0].timestamp, 1_000 - 20);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let p = pager(25);
        assert!(p.page(0).is_empty());
        assert!(p.page(4).is_empty());
        assert!(p.page(usize::MAX).is_empty());
    }

    #[test]
    fn test_set_page_clamps() {
        let mut p = pager(25);
        assert_eq!(p.set_page(2), 2);
        assert_eq!(p.current_jobs().len(), 10);
        assert_eq!(p.set_page(99), 3);
        assert_eq!(p.set_page(0), 1);

        let mut empty = pager(0);
        assert_eq!(empty.set_page(5), 1);
        assert!(empty.current_jobs().is_empty());
    }

    #[test]
    fn test_custom_page_size() {
        let p = PaginatedFeed::new(WorkingSet::from_records(&descending_jobs(7, 100)), 3);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.page(3).len(), 1);
    }
}
