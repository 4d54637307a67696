pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use session::{JobBoard, SessionPhase, ViewSession};
