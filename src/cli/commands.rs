//! CLI commands and argument parsing

use crate::fetcher::DEFAULT_LIMIT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// WeValu workflow node CLI
#[derive(Parser, Debug)]
#[command(name = "wevalu-node")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// WeValu API key
    #[arg(short = 'k', long, global = true, env = "WEVALU_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// WeValu API base URL
    #[arg(long, global = true, env = "WEVALU_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List evaluations
    GetAll {
        /// Fetch every page instead of a single page
        #[arg(long)]
        return_all: bool,

        /// Maximum number of evaluations (ignored with --return-all)
        #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Filter by department ID
        #[arg(long)]
        department_id: Option<String>,

        /// Filter by iteration number (0 = no filter)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        iteration: i64,

        /// Number of evaluations to skip
        #[arg(long)]
        offset: Option<u64>,

        /// Stop with an error after this many full pages
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// Fetch evaluation summary statistics
    Summary,

    /// Execute a run file (YAML or JSON)
    Run {
        /// Path to the run file
        file: PathBuf,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Page cap applied to full fetches
        #[arg(long)]
        max_pages: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
