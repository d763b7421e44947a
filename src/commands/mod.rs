//! CLI command implementations.

pub mod browse;
pub mod list;

pub use browse::{BrowseCommand, ShellCommand};
pub use list::{ListCommand, ListOptions};
