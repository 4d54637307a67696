use std::time::Duration;

use jobboard_engine::{
    FEED_PAGE_SIZE, FeedConfig, InfiniteFeed, LIST_PAGE_SIZE, PaginatedFeed, build_working_set,
    find_by_timestamp,
};
use jobboard_testing::{JobBuilder, descending_jobs, job};
use jobboard_types::JobRecord;

fn no_delay() -> FeedConfig {
    FeedConfig {
        load_more_delay: Duration::ZERO,
        ..FeedConfig::default()
    }
}

/// Interleave invalid and out-of-order records so every view has to
/// filter and sort.
fn shuffled_with_invalid(count: usize) -> Vec<JobRecord> {
    let mut records = Vec::new();
    for i in 0..count as i64 {
        let ts = if i % 2 == 0 { 10_000 + i } else { 10_000 - i };
        records.push(job(ts));
        if i % 3 == 0 {
            records.push(JobBuilder::new(ts + 50_000).invalid().build());
        }
    }
    records
}

#[test]
fn test_views_only_contain_valid_records() {
    let records = shuffled_with_invalid(40);
    let working = build_working_set(&records);

    assert_eq!(working.len(), 40);
    assert!(working.iter().all(|j| j.is_valid_for_display()));

    let pager = PaginatedFeed::with_default_size(working.clone());
    for n in 1..=pager.total_pages() {
        assert!(pager.page(n).iter().all(|j| j.is_valid_for_display()));
    }

    let feed = InfiniteFeed::new(working, no_delay());
    assert!(feed.displayed().iter().all(|j| j.is_valid_for_display()));
}

#[test]
fn test_working_set_is_ordered() {
    let working = build_working_set(&shuffled_with_invalid(40));
    for pair in working.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}

#[test]
fn test_pagination_completeness() {
    for count in [0, 1, LIST_PAGE_SIZE - 1, LIST_PAGE_SIZE, LIST_PAGE_SIZE + 1, 37] {
        let working = build_working_set(&descending_jobs(count, 5_000));
        let pager = PaginatedFeed::with_default_size(working.clone());

        let concatenated: Vec<JobRecord> = (1..=pager.total_pages())
            .flat_map(|n| pager.page(n).to_vec())
            .collect();

        assert_eq!(concatenated.as_slice(), working.as_slice(), "count = {}", count);
        for n in 1..=pager.total_pages() {
            assert!(!pager.page(n).is_empty(), "count = {}, page {}", count, n);
        }
    }
}

#[tokio::test]
async fn test_infinite_scroll_exhaustion() {
    for count in [0, 1, FEED_PAGE_SIZE, FEED_PAGE_SIZE + 1, 50] {
        let working = build_working_set(&descending_jobs(count, 5_000));
        let mut feed = InfiniteFeed::new(working.clone(), no_delay());

        let mut calls = 0;
        while feed.has_more() {
            assert!(feed.load_more().await);
            calls += 1;
            assert!(calls <= count, "feed never exhausted for count = {}", count);
        }

        assert_eq!(feed.displayed(), working.as_slice(), "count = {}", count);

        let before = feed.displayed().len();
        assert!(!feed.load_more().await);
        assert_eq!(feed.displayed().len(), before);
    }
}

#[tokio::test]
async fn test_twenty_five_records_end_to_end() {
    let records = descending_jobs(25, 1_700_000_000);
    let mut feed = InfiniteFeed::new(build_working_set(&records), no_delay());

    assert_eq!(feed.displayed(), &records[..12]);
    assert!(feed.has_more());

    feed.load_more().await;
    assert_eq!(feed.displayed(), &records[..24]);
    assert!(feed.has_more());

    feed.load_more().await;
    assert_eq!(feed.displayed(), records.as_slice());
    assert!(!feed.has_more());
    assert!(feed.reached_end());
}

#[tokio::test(start_paused = true)]
async fn test_load_more_waits_for_delay() {
    let working = build_working_set(&descending_jobs(20, 1_000));
    let mut feed = InfiniteFeed::new(working, FeedConfig::default());

    let started = tokio::time::Instant::now();
    assert!(feed.load_more().await);
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert_eq!(feed.displayed().len(), 20);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_load_more_leaves_records_unchanged() {
    let working = build_working_set(&descending_jobs(20, 1_000));
    let mut feed = InfiniteFeed::new(working, FeedConfig::default());

    let pending = tokio::time::timeout(Duration::from_millis(100), feed.load_more()).await;
    assert!(pending.is_err());

    assert_eq!(feed.displayed().len(), 12);
    assert!(feed.loading_more());
    // A second trigger while the first is still marked pending is ignored
    assert!(!feed.begin_load_more());
}

#[test]
fn test_lookup_ignores_validity() {
    let records = vec![
        job(30),
        JobBuilder::new(20).employer("").build(),
        job(10),
    ];

    let working = build_working_set(&records);
    assert!(working.iter().all(|j| j.timestamp != 20));

    assert_eq!(find_by_timestamp(&records, 20).map(|j| j.timestamp), Some(20));
    assert!(find_by_timestamp(&records, 25).is_none());
}
