use std::path::{Path, PathBuf};

use crate::{JobSource, Result};

/// Job data read from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_body(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
