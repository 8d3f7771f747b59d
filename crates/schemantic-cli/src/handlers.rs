//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod diff;
mod utils;
mod version;
mod warnings;

pub use completions::handle_completions;
pub use diff::handle_diff;
pub use version::handle_version;
pub use warnings::handle_warnings;
