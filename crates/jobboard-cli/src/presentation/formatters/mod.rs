pub mod text;

pub use text::{truncate, wrap};
