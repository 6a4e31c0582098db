use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod convert;
mod error;

/// Converts RD document trees (as JSON) to manual pages
#[derive(Parser, Debug)]
#[command(name = "rd2man", author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    convert: convert::Args,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let args = Args::parse();
    convert::run(&args.convert)
}
