//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "helptree")]
#[command(about = "Convert HTML documentation trees to help text with namespaced tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file (converter command, separator escape)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every .html file under SOURCE_DIR into a .txt file under TARGET_DIR
    Convert {
        /// Directory holding the HTML sources
        source: PathBuf,

        /// Directory receiving the converted documents
        target: PathBuf,

        /// Show the planned conversions without running the converter
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Namespace the tags of every help document under TARGET_DIR, in place
    Qualify {
        /// Directory of converted help documents
        target: PathBuf,

        /// Prefix prepended to every rewritten tag
        prefix: String,

        /// Report what would change without writing files
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}
