use std::fmt;

/// Result type for jobboard-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (reading a local data file, writing output)
    Io(std::io::Error),

    /// JSON serialization failed
    Json(serde_json::Error),

    /// Network retrieval failed: unreachable host, non-2xx status, timeout
    Fetch(reqwest::Error),

    /// Body could not be read as a JSON array of job records
    Parse(String),

    /// CSV import failed
    Csv(csv::Error),
}

impl Error {
    /// Whether the data arrived but could not be understood.
    ///
    /// Everything else counts as a failure to retrieve the data at all.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Fetch(err) => write!(f, "Fetch error: {}", err),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Fetch(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
