use std::future::Future;

use jobboard_types::JobRecord;

use crate::{Error, Result, parse_records};

/// Static job data retrieval
///
/// Responsibilities:
/// - Fetch the raw body of the published job collection
/// - Parse it into typed records
/// - Degrade to an empty collection instead of failing the caller
///
/// Every call goes back to the underlying resource; nothing is cached.
pub trait JobSource: Send + Sync {
    /// Human-readable location of the resource (URL or path)
    fn location(&self) -> String;

    /// Retrieve the raw body of the resource
    fn fetch_body(&self) -> impl Future<Output = Result<String>> + Send;

    /// Retrieve and parse, failing softly
    ///
    /// Fetch and parse failures are logged and reported through
    /// [`LoadOutcome::error`]; `records` is empty in that case.
    fn load(&self) -> impl Future<Output = LoadOutcome> + Send {
        async move {
            let location = self.location();
            tracing::debug!("Loading job data from {}", location);

            let body = match self.fetch_body().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::error!("Error fetching job data from {}: {}", location, err);
                    return LoadOutcome::failed(err);
                }
            };

            match parse_records(&body) {
                Ok(records) => {
                    tracing::debug!("Loaded {} job records from {}", records.len(), location);
                    LoadOutcome::loaded(records)
                }
                Err(err) => {
                    tracing::error!("Error parsing job data from {}: {}", location, err);
                    LoadOutcome::failed(err)
                }
            }
        }
    }
}

/// Result of a soft-failing load
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Records in input order; empty when `error` is set
    pub records: Vec<JobRecord>,
    pub error: Option<Error>,
}

impl LoadOutcome {
    pub fn loaded(records: Vec<JobRecord>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub fn failed(error: Error) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a strict result for callers that want the error.
    pub fn into_result(self) -> Result<Vec<JobRecord>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.records),
        }
    }
}
