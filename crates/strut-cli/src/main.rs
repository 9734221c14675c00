//! Strut CLI entry point: point at a working directory, get the derived
//! bundler configuration on stdout.

mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use strut_config::Synthesizer;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("cannot access working directory `{}`", args.root.display()))?;
    tracing::debug!("synthesizing from `{}`", root.display());

    let config = Synthesizer::new(&root)
        .synthesize()
        .with_context(|| format!("no configuration produced for `{}`", root.display()))?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
