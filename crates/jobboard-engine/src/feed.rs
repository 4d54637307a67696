use std::time::Duration;

use jobboard_types::JobRecord;
use serde::Serialize;

use crate::{FEED_PAGE_SIZE, SCROLL_THRESHOLD, WorkingSet};

/// Tuning for the infinite-scroll feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub page_size: usize,
    /// Pause before each appended batch; purely cosmetic, may be zero
    pub load_more_delay: Duration,
    /// Trigger distance from the bottom of rendered content
    pub scroll_threshold: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: FEED_PAGE_SIZE,
            load_more_delay: Duration::from_millis(500),
            scroll_threshold: SCROLL_THRESHOLD,
        }
    }
}

/// Infinite-scroll feed over a working set.
///
/// `displayed` is always a prefix of the working set. It grows one batch
/// per `load_more` until the working set is exhausted.
#[derive(Debug, Clone)]
pub struct InfiniteFeed {
    working: WorkingSet,
    config: FeedConfig,
    displayed_len: usize,
    has_more: bool,
    loading_more: bool,
}

impl InfiniteFeed {
    pub fn new(working: WorkingSet, config: FeedConfig) -> Self {
        // A zero batch size would never make progress
        let page_size = config.page_size.max(1);
        let config = FeedConfig { page_size, ..config };
        let displayed_len = working.len().min(page_size);
        let has_more = working.len() > page_size;

        Self {
            working,
            config,
            displayed_len,
            has_more,
            loading_more: false,
        }
    }

    pub fn displayed(&self) -> &[JobRecord] {
        &self.working[..self.displayed_len]
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loading_more(&self) -> bool {
        self.loading_more
    }

    /// True once every record is displayed and there was something to show.
    pub fn reached_end(&self) -> bool {
        !self.has_more && self.displayed_len > 0
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Whether a scroll position should trigger `load_more`.
    ///
    /// `viewport_bottom` is the scroll offset plus the viewport height;
    /// `content_height` is the height of everything rendered so far.
    pub fn should_load_more(&self, viewport_bottom: f64, content_height: f64) -> bool {
        viewport_bottom >= content_height - self.config.scroll_threshold
    }

    /// Mark a batch as pending.
    ///
    /// Returns false, changing nothing, while a batch is already pending or
    /// once the feed is exhausted.
    pub fn begin_load_more(&mut self) -> bool {
        if self.loading_more || !self.has_more {
            return false;
        }
        self.loading_more = true;
        true
    }

    /// Append the pending batch. No-op when nothing is pending.
    pub fn finish_load_more(&mut self) {
        if !self.loading_more {
            return;
        }
        let end = (self.displayed_len + self.config.page_size).min(self.working.len());
        self.displayed_len = end;
        self.has_more = end < self.working.len();
        self.loading_more = false;
    }

    /// Append the next batch after the configured delay.
    ///
    /// Returns whether anything was appended. Dropping the future while the
    /// delay is pending leaves `loading_more` set and the feed otherwise
    /// unchanged.
    pub async fn load_more(&mut self) -> bool {
        if !self.begin_load_more() {
            return false;
        }
        if !self.config.load_more_delay.is_zero() {
            tokio::time::sleep(self.config.load_more_delay).await;
        }
        let before = self.displayed_len;
        self.finish_load_more();
        self.displayed_len > before
    }

    /// Plain-data view for presentation layers
    pub fn snapshot(&self) -> FeedSnapshot<'_> {
        FeedSnapshot {
            displayed: self.displayed(),
            has_more: self.has_more,
            loading_more: self.loading_more,
            total: self.working.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot<'a> {
    pub displayed: &'a [JobRecord],
    pub has_more: bool,
    pub loading_more: bool,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_testing::descending_jobs;

    fn feed(count: usize) -> InfiniteFeed {
        let working = WorkingSet::from_records(&descending_jobs(count, 1_000));
        InfiniteFeed::new(
            working,
            FeedConfig {
                load_more_delay: Duration::ZERO,
                ..FeedConfig::default()
            },
        )
    }

    #[test]
    fn test_initial_state() {
        let f = feed(30);
        assert_eq!(f.displayed().len(), 12);
        assert!(f.has_more());
        assert!(!f.loading_more());

        let f = feed(12);
        assert_eq!(f.displayed().len(), 12);
        assert!(!f.has_more());
        assert!(f.reached_end());

        let f = feed(0);
        assert!(f.displayed().is_empty());
        assert!(!f.has_more());
        assert!(!f.reached_end());
    }

    #[test]
    fn test_begin_is_exclusive() {
        let mut f = feed(30);
        assert!(f.begin_load_more());
        assert!(f.loading_more());
        assert!(!f.begin_load_more());

        f.finish_load_more();
        assert_eq!(f.displayed().len(), 24);
        assert!(!f.loading_more());
    }

    #[test]
    fn test_finish_without_begin_is_noop() {
        let mut f = feed(30);
        f.finish_load_more();
        assert_eq!(f.displayed().len(), 12);
    }

    #[test]
    fn test_should_load_more_threshold() {
        let f = feed(30);
        assert!(f.should_load_more(4000.0, 5000.0));
        assert!(f.should_load_more(4500.0, 5000.0));
        assert!(!f.should_load_more(3999.0, 5000.0));
        assert!(f.should_load_more(800.0, 600.0));
    }

    #[test]
    fn test_zero_page_size_still_progresses() {
        let working = WorkingSet::from_records(&descending_jobs(3, 10));
        let mut f = InfiniteFeed::new(
            working,
            FeedConfig {
                page_size: 0,
                load_more_delay: Duration::ZERO,
                ..FeedConfig::default()
            },
        );
        assert_eq!(f.displayed().len(), 1);
        assert!(f.begin_load_more());
        f.finish_load_more();
        assert_eq!(f.displayed().len(), 2);
    }

    #[test]
    fn test_snapshot_serializes_presentation_flags() {
        let f = feed(13);
        let value = serde_json::to_value(f.snapshot()).unwrap();
        assert_eq!(value["has_more"], true);
        assert_eq!(value["loading_more"], false);
        assert_eq!(value["total"], 13);
        assert_eq!(value["displayed"].as_array().unwrap().len(), 12);
    }
}
