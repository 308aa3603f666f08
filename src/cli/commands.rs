//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Activity API command-line client
#[derive(Parser, Debug)]
#[command(name = "activity-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token (overrides the config file)
    #[arg(long, global = true, env = "ACTIVITY_CLIENT_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Records per page on list endpoints
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Concurrent activity fetches
    #[arg(long, global = true)]
    pub pool_size: Option<usize>,

    /// Output field delimiter character
    #[arg(short, long, global = true, default_value = ",")]
    pub delimiter: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print activity summaries, oldest first
    Summaries {
        /// Only include activities with a greater id (exclusive)
        #[arg(long, default_value = "0")]
        after: i64,
    },

    /// Print segment efforts of every activity newer than the watermark
    Segments {
        /// Only include activities with a greater id (exclusive)
        #[arg(long, default_value = "0")]
        after: i64,
    },

    /// Print segment efforts of one activity
    Activity {
        /// Activity id
        id: i64,
    },

    /// Print summaries of activities related to one activity
    Related {
        /// Activity id
        id: i64,
    },
}
