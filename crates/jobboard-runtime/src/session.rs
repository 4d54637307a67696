use std::fmt;

use jobboard_engine::{
    FeedConfig, InfiniteFeed, PaginatedFeed, WorkingSet, build_working_set, find_by_timestamp,
    parse_route_timestamp,
};
use jobboard_providers::{DataSource, JobSource, source_from_location};
use jobboard_types::{JobRecord, Timestamp};

use crate::{Config, Error, Result};

/// Lifecycle of one view session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Loading => "loading",
            SessionPhase::Ready => "ready",
            SessionPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One navigation to a listing or detail view.
///
/// Owns a single load of the job data: `Idle -> Loading -> Ready | Failed`.
/// There is no way back to `Loading`; a fresh view builds a fresh session,
/// which fetches again.
pub struct ViewSession<S: JobSource> {
    source: S,
    phase: SessionPhase,
    records: Vec<JobRecord>,
    working: WorkingSet,
    error: Option<jobboard_providers::Error>,
}

impl<S: JobSource> ViewSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: SessionPhase::Idle,
            records: Vec::new(),
            working: WorkingSet::default(),
            error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    /// Why the load failed, once in the `Failed` phase
    pub fn error(&self) -> Option<&jobboard_providers::Error> {
        self.error.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and derive the working set.
    ///
    /// Fetch and parse failures are not returned as errors: the source has
    /// already logged them and the session lands in `Failed` with nothing to
    /// show. Loading twice is an invalid operation.
    pub async fn load(&mut self) -> Result<SessionPhase> {
        if self.phase != SessionPhase::Idle {
            return Err(Error::InvalidOperation(format!(
                "session already {}; open a new session to reload",
                self.phase
            )));
        }

        self.phase = SessionPhase::Loading;
        let outcome = self.source.load().await;

        match outcome.error {
            Some(err) => {
                self.error = Some(err);
                self.phase = SessionPhase::Failed;
            }
            None => {
                self.working = build_working_set(&outcome.records);
                tracing::debug!(
                    "Session ready: {} records loaded, {} listed",
                    outcome.records.len(),
                    self.working.len()
                );
                self.records = outcome.records;
                self.phase = SessionPhase::Ready;
            }
        }

        Ok(self.phase)
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Error::NotReady(self.phase))
        }
    }

    /// Every loaded record in input order, including ones hidden from listings
    pub fn records(&self) -> Result<&[JobRecord]> {
        self.ensure_ready()?;
        Ok(&self.records)
    }

    pub fn working_set(&self) -> Result<&WorkingSet> {
        self.ensure_ready()?;
        Ok(&self.working)
    }

    pub fn feed(&self, config: FeedConfig) -> Result<InfiniteFeed> {
        self.ensure_ready()?;
        Ok(InfiniteFeed::new(self.working.clone(), config))
    }

    pub fn pages(&self, page_size: usize) -> Result<PaginatedFeed> {
        self.ensure_ready()?;
        Ok(PaginatedFeed::new(self.working.clone(), page_size))
    }

    /// Detail lookup; `Ok(None)` is the ordinary not-found outcome.
    pub fn find_by_timestamp(&self, timestamp: Timestamp) -> Result<Option<&JobRecord>> {
        self.ensure_ready()?;
        Ok(find_by_timestamp(&self.records, timestamp))
    }

    /// Detail lookup from an unparsed route parameter.
    pub fn find_by_route(&self, param: &str) -> Result<Option<&JobRecord>> {
        self.find_by_timestamp(parse_route_timestamp(param))
    }
}

/// Entry point tying configuration to sessions
pub struct JobBoard {
    config: Config,
}

impl JobBoard {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A fresh, unloaded session against the configured source
    pub fn session(&self) -> Result<ViewSession<DataSource>> {
        let source = source_from_location(&self.config.source, self.config.request_timeout())?;
        Ok(ViewSession::new(source))
    }

    /// A fresh session, already loaded
    pub async fn open_session(&self) -> Result<ViewSession<DataSource>> {
        let mut session = self.session()?;
        session.load().await?;
        Ok(session)
    }

    pub fn feed_config(&self) -> FeedConfig {
        self.config.feed_config()
    }

    pub fn list_page_size(&self) -> usize {
        self.config.list_page_size
    }
}
