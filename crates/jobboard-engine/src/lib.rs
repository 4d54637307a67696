// Engine module - Listing view controller
// This layer sits between loaded records (providers) and the presentation layer

pub mod feed;
pub mod lookup;
pub mod pager;
pub mod working_set;

pub use feed::{FeedConfig, FeedSnapshot, InfiniteFeed};
pub use lookup::{find_by_timestamp, parse_route_timestamp};
pub use pager::{PageSnapshot, PaginatedFeed};
pub use working_set::WorkingSet;

use jobboard_types::JobRecord;

// Façade API - Stable public interface for runtime and CLI layers

/// Default batch size of the infinite-scroll feed (4 columns x 3 rows)
pub const FEED_PAGE_SIZE: usize = 12;

/// Default page size of the paginated listing
pub const LIST_PAGE_SIZE: usize = 10;

/// Distance from the bottom of rendered content that triggers a load-more
pub const SCROLL_THRESHOLD: f64 = 1000.0;

/// Build the working set from loaded records: valid only, newest first
pub fn build_working_set(records: &[JobRecord]) -> WorkingSet {
    WorkingSet::from_records(records)
}
