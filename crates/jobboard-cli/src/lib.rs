// NOTE: jobboard Architecture
//
// providers -> engine -> runtime -> cli
// - providers fetch and parse the published job data, failing softly
// - engine derives the working set and the feed, page and detail views
// - runtime owns one load per view session and the configuration
// - cli renders those views to the terminal
//
// Every command opens its own session and therefore fetches again; there
// is no cache between invocations.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;
