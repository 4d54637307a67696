use anyhow::Result;
use jobboard_engine::{PaginatedFeed, WorkingSet};
use jobboard_runtime::JobBoard;

use super::session::open_view;
use crate::OutputFormat;
use crate::presentation::views::PageView;
use crate::presentation::{Theme, print_json, print_view};

pub async fn handle(board: &JobBoard, page: usize, format: OutputFormat) -> Result<()> {
    let theme = Theme::detect();
    let session = open_view(board, theme).await?;

    let mut pager = if session.is_ready() {
        session.pages(board.list_page_size())?
    } else {
        PaginatedFeed::new(WorkingSet::default(), board.list_page_size())
    };

    let shown = pager.set_page(page);
    if shown != page {
        tracing::info!("Page {} out of range, showing page {}", page, shown);
    }

    let snapshot = pager.snapshot();
    match format {
        OutputFormat::Json => print_json(&snapshot)?,
        OutputFormat::Plain => print_view(PageView::new(&snapshot, theme)),
    }
    Ok(())
}
