use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for kbri
#[derive(Debug, Parser)]
#[command(
    name = "kbri",
    version,
    about = "Find the nearest Indonesian embassy (KBRI) or consulate (KJRI)"
)]
pub struct CliArgs {
    /// Path to the world-cities CSV (plain or .gz). Defaults to the bundled dataset.
    #[arg(long = "cities", env = "KBRI_CITIES", global = true)]
    pub cities: Option<PathBuf>,

    /// Path to the office CSV (plain or .gz). Defaults to the bundled dataset.
    #[arg(long = "offices", env = "KBRI_OFFICES", global = true)]
    pub offices: Option<PathBuf>,

    /// Always parse the CSV sources; never read or write a snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Log more (-v = info, -vv = debug). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded catalogs
    Stats,

    /// List representative offices, optionally filtered by city or country
    Offices {
        /// Substring of a city or country name (case/accent-insensitive)
        filter: Option<String>,
    },

    /// Resolve a place name to a reference city
    Resolve {
        /// City, region or country name
        query: String,
    },

    /// Find the nearest offices to a place
    Nearest {
        /// City, region or country name
        query: String,

        /// How many offices to list
        #[arg(short = 'k', long = "top", default_value_t = kbri_core::DEFAULT_TOP_K)]
        top: usize,

        /// Print the outcome as JSON instead of prose
        #[arg(long)]
        json: bool,
    },
}
