//! # Presentation Layer
//!
//! Console output for the listing and detail views.
//!
//! ```text
//! [ Handler ] --> [ engine snapshot ] ==(JSON)==> [ serde_json ] --> stdout
//!                                     ==(Text)==> [ View ] --> stdout
//! ```
//!
//! - `views/` holds `fmt::Display` structs. They decide layout and color.
//! - `formatters/` holds string helpers the views share.
//! - `theme` decides whether color is on and how wide lines may get.
//!
//! JSON output is always the engine snapshot, untouched. Text output never
//! feeds back into state.

pub mod formatters;
pub mod renderer;
pub mod theme;
pub mod views;

pub use renderer::{print_json, print_view};
pub use theme::Theme;
