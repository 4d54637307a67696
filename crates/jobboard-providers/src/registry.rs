use std::time::Duration;

use crate::{FileSource, HttpSource, JobSource, Result};

/// Source picked from a configured location string
#[derive(Debug, Clone)]
pub enum DataSource {
    Http(HttpSource),
    File(FileSource),
}

impl JobSource for DataSource {
    fn location(&self) -> String {
        match self {
            DataSource::Http(source) => source.location(),
            DataSource::File(source) => source.location(),
        }
    }

    async fn fetch_body(&self) -> Result<String> {
        match self {
            DataSource::Http(source) => source.fetch_body().await,
            DataSource::File(source) => source.fetch_body().await,
        }
    }
}

/// Select a source for `location`.
///
/// `http://` and `https://` locations are fetched over the network,
/// `file://` locations and bare paths are read from disk.
pub fn source_from_location(location: &str, timeout: Option<Duration>) -> Result<DataSource> {
    let trimmed = location.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(DataSource::Http(HttpSource::with_timeout(trimmed, timeout)?));
    }

    let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
    Ok(DataSource::File(FileSource::new(path)))
}
