//! Display helpers shared by every view of a [`JobRecord`].

use chrono::DateTime;

use crate::JobRecord;

pub const SALARY_NOT_SPECIFIED: &str = "Salary not specified";
pub const VISA_SPONSORSHIP_TAG: &str = "Visa Sponsorship";

/// The board only lists postings for a single region.
pub const LOCATION: &str = "Victoria, BC";

impl JobRecord {
    /// Salary line for cards and the detail view.
    ///
    /// A free-form `salaryRange` wins; otherwise the low/high compensation
    /// pair is combined when both halves are present.
    pub fn salary_display(&self) -> String {
        if !self.salary_range.is_empty() {
            return self.salary_range.clone();
        }
        if !self.comp_low.is_empty() && !self.comp_high.is_empty() {
            return format!("${} - ${}", self.comp_low, self.comp_high);
        }
        SALARY_NOT_SPECIFIED.to_string()
    }

    /// Posting date as "Month day, year" in UTC.
    ///
    /// Returns `None` for a zero timestamp, which the importer never emits
    /// but hand-edited data files may contain.
    pub fn posted_date(&self) -> Option<String> {
        if self.timestamp == 0 {
            return None;
        }
        match DateTime::from_timestamp(self.timestamp, 0) {
            Some(dt) => Some(dt.format("%B %-d, %Y").to_string()),
            None => Some("Invalid date".to_string()),
        }
    }

    /// Chips shown under a posting: working style, role type, sponsorship.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags = Vec::new();
        if !self.working_style.is_empty() {
            tags.push(self.working_style.as_str());
        }
        if !self.role_type.is_empty() {
            tags.push(self.role_type.as_str());
        }
        if self.has_visa_sponsorship() {
            tags.push(VISA_SPONSORSHIP_TAG);
        }
        tags
    }
}
