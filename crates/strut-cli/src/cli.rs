//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Strut - derive a complete bundler configuration from a project manifest
#[derive(Parser, Debug)]
#[command(
    name = "strut",
    version,
    about = "Derive a bundler configuration plan from a project manifest",
    long_about = "Strut reads a declarative project manifest (strut.toml, or the `strut`\n\
                  field of package.json) and deterministically derives the complete\n\
                  bundler configuration: entries, environment injection, HTML generation\n\
                  directives, output and resolve rules, and dev-server defaults.\n\
                  The plan is printed as JSON for the bundler runtime to execute."
)]
pub struct Cli {
    /// Working directory containing the manifest
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
