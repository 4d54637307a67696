use std::ops::Deref;
use std::sync::Arc;

use jobboard_types::JobRecord;

/// Validity-filtered, recency-sorted view of one load.
///
/// Computed once per session and shared read-only by every mode; cloning
/// is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingSet {
    jobs: Arc<[JobRecord]>,
}

impl WorkingSet {
    /// Keep records valid for display, then sort by timestamp descending.
    ///
    /// The sort is stable: postings with equal timestamps keep their input
    /// order.
    pub fn from_records(records: &[JobRecord]) -> Self {
        let mut jobs: Vec<JobRecord> = records
            .iter()
            .filter(|job| job.is_valid_for_display())
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self { jobs: jobs.into() }
    }

    pub fn as_slice(&self) -> &[JobRecord] {
        &self.jobs
    }
}

impl Deref for WorkingSet {
    type Target = [JobRecord];

    fn deref(&self) -> &Self::Target {
        &self.jobs
    }
}
