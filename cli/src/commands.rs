pub mod points;
pub mod submit;
pub mod validate;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use scenegen_core::client::SCENES_API_URL_ENV;
use scenegen_core::loader::DEFAULT_DOMAINS_PATH;

#[derive(Parser)]
#[command(name = "scenegen")]
#[command(about = "Expands domain grids into scenes and submits them to the scene service.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Domain file to read
    #[arg(short, long, global = true, default_value = DEFAULT_DOMAINS_PATH)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a scene for every enabled domain
    #[command(alias = "s")]
    Submit(SubmitArgs),
    /// Load the domain file and report every domain without submitting
    #[command(alias = "v")]
    Validate,
    /// Print the grid points of one domain
    #[command(alias = "p")]
    Points {
        /// Name of the domain
        domain: String,
        /// Print only the number of points
        #[arg(long)]
        count: bool,
    },
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Scene-creation endpoint
    #[arg(long, env = SCENES_API_URL_ENV)]
    pub api_url: Option<String>,

    /// Log each request payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Stamp every request with a freshly generated scene id
    #[arg(long)]
    pub assign_ids: bool,

    /// Stamp every request with this RFC 3339 timestamp
    #[arg(long)]
    pub time: Option<DateTime<Utc>>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
