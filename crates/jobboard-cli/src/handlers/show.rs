use anyhow::Result;
use jobboard_runtime::JobBoard;
use jobboard_types::JobRecord;
use serde::Serialize;

use super::session::open_view;
use crate::OutputFormat;
use crate::presentation::views::{JobDetailView, NotFoundView};
use crate::presentation::{Theme, print_json, print_view};

#[derive(Serialize)]
struct ShowOutput<'a> {
    job: Option<&'a JobRecord>,
}

/// Detail view. Lookup covers every loaded record, listed or not.
pub async fn handle(board: &JobBoard, timestamp: &str, format: OutputFormat) -> Result<()> {
    let theme = Theme::detect();
    let session = open_view(board, theme).await?;

    let job = if session.is_ready() {
        session.find_by_route(timestamp)?
    } else {
        None
    };

    match format {
        OutputFormat::Json => print_json(&ShowOutput { job })?,
        OutputFormat::Plain => match job {
            Some(job) => print_view(JobDetailView::new(job, theme)),
            None => print_view(NotFoundView::new(theme)),
        },
    }
    Ok(())
}
