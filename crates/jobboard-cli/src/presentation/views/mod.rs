mod job;
mod listing;
mod summary;

pub use job::{JobCardView, JobDetailView, NotFoundView};
pub use listing::{EmptyStateView, FeedView, PageView, LIST_HEADER};
pub use summary::{ImportSummaryView, LinkCheckSummaryView};
