//! CLI commands and argument parsing

use crate::config::Backend;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// GameLift command kit
#[derive(Parser, Debug)]
#[command(name = "gamelift-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Client backend: `local` (GameLift Local) or `sdk` (signed AWS calls)
    #[arg(short, long, global = true)]
    pub backend: Option<Backend>,

    /// Service endpoint, overrides config and environment
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// AWS region for the sdk backend
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS profile for the sdk backend
    #[arg(long, global = true)]
    pub profile: Option<String>,

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
    /// Call one operation, following pagination for list/describe calls
    Invoke(InvokeArgs),

    /// List the operations the kit can call
    Operations,
}

/// Arguments for `invoke`
#[derive(Args, Debug, Clone, Default)]
pub struct InvokeArgs {
    /// Operation name (`ListBuilds` or `list-builds`)
    pub operation: String,

    /// Inline request JSON
    #[arg(long, conflicts_with = "input_file")]
    pub input_json: Option<String>,

    /// Request JSON file
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Resume from this continuation token
    #[arg(long)]
    pub next_token: Option<String>,

    /// Stop after at least this many items
    #[arg(long)]
    pub limit: Option<u64>,

    /// Page-size hint sent with every call
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub page_size: Option<i32>,

    /// Give up after this many calls
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
