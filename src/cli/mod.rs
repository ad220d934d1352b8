//! CLI module
//!
//! Command-line interface for running the WeValu node.
//!
//! # Commands
//!
//! - `get-all` - List evaluations (one page or all)
//! - `summary` - Fetch summary statistics
//! - `run` - Execute a run file
//! - `serve` - Start HTTP server mode

mod commands;
mod output;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use output::{format_item, print_items};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
