//! Job record fixtures.

use jobboard_types::{JobRecord, Timestamp};

/// Fluent builder for [`JobRecord`] fixtures.
///
/// Starts from a record that is valid for display.
#[derive(Debug, Clone)]
pub struct JobBuilder {
    record: JobRecord,
}

impl JobBuilder {
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            record: JobRecord {
                timestamp,
                job_title: format!("Job {}", timestamp),
                employer_name: format!("Employer {}", timestamp),
                job_link: format!("https://jobs.test/{}", timestamp),
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.job_title = title.to_string();
        self
    }

    pub fn employer(mut self, employer: &str) -> Self {
        self.record.employer_name = employer.to_string();
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.record.job_link = link.to_string();
        self
    }

    pub fn salary_range(mut self, range: &str) -> Self {
        self.record.salary_range = range.to_string();
        self
    }

    pub fn comp(mut self, low: &str, high: &str) -> Self {
        self.record.comp_low = low.to_string();
        self.record.comp_high = high.to_string();
        self
    }

    pub fn working_style(mut self, style: &str) -> Self {
        self.record.working_style = style.to_string();
        self
    }

    pub fn role_type(mut self, role: &str) -> Self {
        self.record.role_type = role.to_string();
        self
    }

    pub fn visa_sponsorship(mut self, value: &str) -> Self {
        self.record.visa_sponsorship = value.to_string();
        self
    }

    pub fn additional_info(mut self, info: &str) -> Self {
        self.record.additional_info = info.to_string();
        self
    }

    pub fn hiring_process(mut self, process: &str) -> Self {
        self.record.hiring_process = process.to_string();
        self
    }

    pub fn contact_slack(mut self, contact: &str) -> Self {
        self.record.contact_slack = contact.to_string();
        self
    }

    /// Strip the fields required for display.
    pub fn invalid(mut self) -> Self {
        self.record.job_title.clear();
        self
    }

    pub fn build(self) -> JobRecord {
        self.record
    }
}

/// Shorthand for a valid record with generated fields.
pub fn job(timestamp: Timestamp) -> JobRecord {
    JobBuilder::new(timestamp).build()
}

/// `count` valid records with distinct timestamps, newest first.
///
/// Record `i` (0-based) has timestamp `base - i`.
pub fn descending_jobs(count: usize, base: Timestamp) -> Vec<JobRecord> {
    (0..count as i64).map(|i| job(base - i)).collect()
}

/// Serialize records the way the published file does.
pub fn to_json(records: &[JobRecord]) -> String {
    serde_json::to_string_pretty(records).expect("records serialize")
}
