//! Survey export import.
//!
//! Postings are collected through a form whose CSV export carries a few
//! preamble lines above the real header and repeats header-ish rows in the
//! body. This module turns that export into the published record layout.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use jobboard_types::{JobRecord, Timestamp};

use crate::Result;

const DATETIME_FORMATS: &[&str] = &["%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// First-cell fragments of rows that repeat form instructions
const HEADER_LIKE_MARKERS: &[&str] = &["What's the link", "Please share", "Starting November"];

// Survey column positions
const COL_TIMESTAMP: usize = 0;
const COL_JOB_LINK: usize = 1;
const COL_ADDITIONAL_INFO: usize = 2;
const COL_INCLUDE_SALARY_RANGE: usize = 3;
const COL_SALARY_RANGE: usize = 4;
const COL_EMPLOYER_NAME: usize = 5;
const COL_JOB_TITLE: usize = 6;
const COL_WORKING_STYLE: usize = 7;
const COL_COMPENSATION_INFO: usize = 9;
const COL_COMPLIANCE_PLAN: usize = 10;
const COL_CONTACT_SLACK: usize = 11;
const COL_ROLE_TYPE: usize = 12;
const COL_VISA_SPONSORSHIP: usize = 13;
const COL_HIRING_PROCESS: usize = 14;
const COL_COMP_LOW: usize = 15;
const COL_COMP_HIGH: usize = 16;

/// Parse a survey timestamp cell into Unix seconds (UTC).
///
/// Returns `None` for blank or unrecognised cells.
pub fn parse_survey_timestamp(cell: &str) -> Option<Timestamp> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(dt.and_utc().timestamp());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format)
            && let Some(dt) = date.and_hms_opt(0, 0, 0)
        {
            return Some(dt.and_utc().timestamp());
        }
    }
    None
}

/// Convert survey CSV text into records, most recent first.
pub fn import_csv(text: &str) -> Result<Vec<JobRecord>> {
    let body = &text[header_offset(text)..];

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row?;
        let first = row.get(COL_TIMESTAMP).unwrap_or("");
        if first.trim().is_empty() {
            continue;
        }
        if is_header_like(first) {
            skipped += 1;
            continue;
        }

        let cell = |index: usize| row.get(index).unwrap_or("").to_string();
        if cell(COL_JOB_TITLE).is_empty() || cell(COL_JOB_LINK).is_empty() {
            skipped += 1;
            continue;
        }

        let Some(timestamp) = parse_survey_timestamp(first) else {
            tracing::debug!("Skipping row with unrecognised timestamp: {}", first);
            skipped += 1;
            continue;
        };

        records.push(JobRecord {
            timestamp,
            job_link: cell(COL_JOB_LINK),
            additional_info: cell(COL_ADDITIONAL_INFO),
            include_salary_range: cell(COL_INCLUDE_SALARY_RANGE),
            salary_range: cell(COL_SALARY_RANGE),
            employer_name: cell(COL_EMPLOYER_NAME),
            job_title: cell(COL_JOB_TITLE),
            working_style: cell(COL_WORKING_STYLE),
            compensation_info: cell(COL_COMPENSATION_INFO),
            compliance_plan: cell(COL_COMPLIANCE_PLAN),
            contact_slack: cell(COL_CONTACT_SLACK),
            role_type: cell(COL_ROLE_TYPE),
            visa_sponsorship: cell(COL_VISA_SPONSORSHIP),
            hiring_process: cell(COL_HIRING_PROCESS),
            comp_low: cell(COL_COMP_LOW),
            comp_high: cell(COL_COMP_HIGH),
        });
    }

    // Stable: postings from the same second keep their survey order
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    tracing::debug!("Imported {} records, skipped {}", records.len(), skipped);
    Ok(records)
}

/// Read a survey export from disk and convert it.
pub fn import_csv_file(path: &Path) -> Result<Vec<JobRecord>> {
    let text = std::fs::read_to_string(path)?;
    import_csv(&text)
}

/// Byte offset of the real header line; the start of the text if none is found.
fn header_offset(text: &str) -> usize {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.contains("Timestamp") && line.contains("Employer name") {
            return offset;
        }
        offset += line.len();
    }
    0
}

fn is_header_like(first_cell: &str) -> bool {
    first_cell == "Timestamp"
        || HEADER_LIKE_MARKERS
            .iter()
            .any(|marker| first_cell.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Timestamp,What's the link to the job posting?,Additional info,Include salary range?,Salary range,Employer name,Job title,Working style,Unused,Compensation info,Compliance plan,Contact on Slack,Role type,Visa sponsorship,Hiring process,Comp low,Comp high";

    fn row(ts: &str, link: &str, employer: &str, title: &str) -> String {
        format!(
            "{ts},{link},Great team,Yes,,{employer},{title},Remote,,Benefits,,@hiring,Full-time,,Two interviews,90000,120000"
        )
    }

    #[test]
    fn test_parse_survey_timestamp_formats() {
        assert_eq!(parse_survey_timestamp("5/2/2019 17:11:13"), Some(1556817073));
        assert_eq!(parse_survey_timestamp("2019-05-02 17:11:13"), Some(1556817073));
        assert_eq!(parse_survey_timestamp("5/2/2019"), Some(1556755200));
        assert_eq!(parse_survey_timestamp(" 2019-05-02 "), Some(1556755200));
        assert_eq!(parse_survey_timestamp(""), None);
        assert_eq!(parse_survey_timestamp("sometime in May"), None);
    }

    #[test]
    fn test_import_skips_preamble_and_sorts() {
        let csv = [
            "Victoria tech job board".to_string(),
            "Please share postings in the form below".to_string(),
            HEADER.to_string(),
            row("5/2/2019 17:11:13", "https://a.test/1", "Alpha", "Developer"),
            row("6/1/2020 09:00:00", "https://b.test/2", "Beta", "Designer"),
        ]
        .join("\n");

        let records = import_csv(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employer_name, "Beta");
        assert_eq!(records[1].employer_name, "Alpha");

        let alpha = &records[1];
        assert_eq!(alpha.timestamp, 1556817073);
        assert_eq!(alpha.job_link, "https://a.test/1");
        assert_eq!(alpha.additional_info, "Great team");
        assert_eq!(alpha.include_salary_range, "Yes");
        assert_eq!(alpha.working_style, "Remote");
        assert_eq!(alpha.compensation_info, "Benefits");
        assert_eq!(alpha.contact_slack, "@hiring");
        assert_eq!(alpha.role_type, "Full-time");
        assert_eq!(alpha.hiring_process, "Two interviews");
        assert_eq!(alpha.comp_low, "90000");
        assert_eq!(alpha.comp_high, "120000");
    }

    #[test]
    fn test_import_skips_incomplete_and_header_like_rows() {
        let csv = [
            HEADER.to_string(),
            "Timestamp,repeated header".to_string(),
            "Starting November we ask for salary ranges,,,,,,".to_string(),
            row("5/2/2019 17:11:13", "", "Alpha", "Developer"),
            row("5/3/2019 17:11:13", "https://a.test/1", "Alpha", ""),
            row("not a date", "https://a.test/2", "Alpha", "Developer"),
            ",,,,,,".to_string(),
            "5/4/2019 10:00:00,https://short.test,,,,Short Co,Tester".to_string(),
        ]
        .join("\n");

        let records = import_csv(&csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employer_name, "Short Co");
        assert_eq!(records[0].working_style, "");
        assert_eq!(records[0].comp_high, "");
    }

    #[test]
    fn test_import_keeps_survey_order_for_equal_timestamps() {
        let csv = [
            HEADER.to_string(),
            row("5/2/2019", "https://a.test/1", "First", "Developer"),
            row("5/2/2019", "https://a.test/2", "Second", "Developer"),
        ]
        .join("\n");

        let records = import_csv(&csv).unwrap();
        assert_eq!(records[0].employer_name, "First");
        assert_eq!(records[1].employer_name, "Second");
    }

    #[test]
    fn test_import_quoted_cells() {
        let csv = [
            HEADER.to_string(),
            "5/2/2019 17:11:13,https://q.test,\"Line one, with comma\",,\"$80k-$100k\",Quoted Co,Engineer".to_string(),
        ]
        .join("\n");

        let records = import_csv(&csv).unwrap();
        assert_eq!(records[0].additional_info, "Line one, with comma");
        assert_eq!(records[0].salary_range, "$80k-$100k");
    }
}
