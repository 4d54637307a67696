// Error types
pub mod error;

// Trait-based source architecture (public API)
pub mod traits;

// Source implementations
pub mod file;
pub mod http;

// Body parsing
pub mod parse;

// Location-based source selection
pub mod registry;

// Maintenance tooling for the published data file
pub mod import;
pub mod links;

pub use traits::{JobSource, LoadOutcome};

pub use file::FileSource;
pub use http::HttpSource;

pub use parse::{parse_records, read_records_file, write_records_file};

pub use registry::{DataSource, source_from_location};

pub use import::{import_csv, import_csv_file, parse_survey_timestamp};
pub use links::{LinkCheckOptions, LinkCheckReport, LinkCheckStats, LinkChecker, LinkStatus};

// Error types
pub use error::{Error, Result};
