use anyhow::Result;
use jobboard_engine::{InfiniteFeed, WorkingSet};
use jobboard_runtime::JobBoard;

use super::session::open_view;
use crate::OutputFormat;
use crate::presentation::views::FeedView;
use crate::presentation::{Theme, print_json, print_view};

/// Infinite-scroll feed. Each extra batch stands in for one scroll past the
/// load-more threshold.
pub async fn handle(
    board: &JobBoard,
    batches: usize,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let theme = Theme::detect();
    let session = open_view(board, theme).await?;

    let mut feed = if session.is_ready() {
        session.feed(board.feed_config())?
    } else {
        InfiniteFeed::new(WorkingSet::default(), board.feed_config())
    };

    let mut loaded = 0;
    while (all || loaded < batches) && feed.has_more() {
        if !feed.load_more().await {
            break;
        }
        loaded += 1;
    }
    tracing::debug!("Loaded {} extra batches", loaded);

    let snapshot = feed.snapshot();
    match format {
        OutputFormat::Json => print_json(&snapshot)?,
        OutputFormat::Plain => print_view(FeedView::new(&snapshot, theme)),
    }
    Ok(())
}
