pub mod job;
pub mod presentation;

pub use job::{JobRecord, Timestamp};
pub use presentation::{LOCATION, SALARY_NOT_SPECIFIED, VISA_SPONSORSHIP_TAG};
