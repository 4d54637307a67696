use std::path::Path;

use jobboard_types::JobRecord;

use crate::{Error, Result};

/// Parse a published job data body.
///
/// The body must be a JSON array of objects. Individual objects may omit
/// any field, but a body of some other shape is rejected as a whole rather
/// than partially read.
pub fn parse_records(body: &str) -> Result<Vec<JobRecord>> {
    serde_json::from_str::<Vec<JobRecord>>(body)
        .map_err(|err| Error::Parse(format!("expected a JSON array of job records: {}", err)))
}

/// Read and parse a local job data file, failing on any error.
pub fn read_records_file(path: &Path) -> Result<Vec<JobRecord>> {
    let body = std::fs::read_to_string(path)?;
    parse_records(&body)
}

/// Write records as pretty-printed JSON, the layout of the published file.
pub fn write_records_file(path: &Path, records: &[JobRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(records)?;
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}
