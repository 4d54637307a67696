mod session;

pub mod check_links;
pub mod config;
pub mod feed;
pub mod import;
pub mod list;
pub mod show;
