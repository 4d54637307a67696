use anyhow::Result;
use jobboard_providers::DataSource;
use jobboard_runtime::{JobBoard, SessionPhase, ViewSession};

use crate::presentation::Theme;

/// Open a loaded session for one view.
///
/// A failed load is reported on stderr and the view renders its empty
/// state; nothing about a bad data file is fatal.
pub(crate) async fn open_view(board: &JobBoard, theme: Theme) -> Result<ViewSession<DataSource>> {
    let session = board.open_session().await?;
    if session.phase() == SessionPhase::Failed {
        let reason = session
            .error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        eprintln!(
            "{}",
            theme.warning(&format!(
                "Could not load job data from {}: {}",
                board.config().source,
                reason
            ))
        );
    }
    Ok(session)
}
