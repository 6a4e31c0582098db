use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use clap::Args as ClapArgs;
use rayon::prelude::*;
use rd_converters_core::{Converter, GeneratorMetadata, Options, PrettyDuration};
use rd_converters_manpage::{Error, Processor};
use rd_tree::Document;

use crate::error;

/// Name shown for a document read from stdin.
const STDIN_NAME: &str = "<stdin>";

/// Convert RD document trees to manual pages
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// List of JSON document trees to convert
    #[arg(conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Read a single document tree from stdin
    #[arg(long, conflicts_with = "files")]
    pub stdin: bool,

    /// Title of the manual page, instead of the one derived from the source name
    #[arg(short, long)]
    pub title: Option<String>,

    /// Write to stdout instead of a `.1` file next to each input
    #[arg(short = 'o', long)]
    pub stdout: bool,

    /// Show timing information
    #[arg(long)]
    pub timings: bool,
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    let options = Options::builder()
        .generator_metadata(GeneratorMetadata::new(
            env!("CARGO_BIN_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
        .maybe_title(args.title.clone())
        .timings(args.timings)
        .build();

    if args.stdin {
        return run_stdin(options);
    }

    if args.files.is_empty() {
        anyhow::bail!("You must pass at least one file, or --stdin");
    }

    run_files(args, &options);
    Ok(())
}

/// Stdin has no file name to derive an output path from, so it always goes to stdout.
#[tracing::instrument(skip(options))]
fn run_stdin(options: Options) -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read the document tree from stdin")?;

    let processor = Processor::new(options);
    let result = rd_tree::from_str(&input)
        .map_err(Error::from)
        .and_then(|doc| processor.convert(&doc, None));

    if let Err(e) = result {
        eprintln!("{:?}", error::display(&e, Some((STDIN_NAME, &input))));
        std::process::exit(1);
    }
    Ok(())
}

#[tracing::instrument(skip(options))]
fn run_files(args: &Args, options: &Options) {
    // PHASE 1: Load all trees in parallel
    let loaded: Vec<(PathBuf, Result<Document, Error>)> = args
        .files
        .par_iter()
        .map(|file| {
            let now = Instant::now();
            let result = rd_tree::from_file(file).map_err(Error::from);
            if options.timings() && result.is_ok() {
                eprintln!("  Loaded {} in {}", file.display(), now.elapsed().pretty_print());
            }
            (file.clone(), result)
        })
        .collect();

    // PHASE 2: Convert. Separate output files can be written in parallel, stdout
    // has to be written in order to avoid interleaving.
    let results: Vec<(PathBuf, Result<(), Error>)> = if args.stdout {
        let processor = Processor::new(options.clone());
        loaded
            .into_iter()
            .map(|(file, result)| {
                let converted = result.and_then(|doc| {
                    timed(options, &file, || {
                        processor.write_to(&doc, io::stdout().lock(), Some(&file))
                    })
                });
                (file, converted)
            })
            .collect()
    } else {
        loaded
            .into_par_iter()
            .map(|(file, result)| {
                let processor = Processor::new(options.clone());
                let converted = result
                    .and_then(|doc| timed(options, &file, || processor.convert(&doc, Some(&file))));
                (file, converted)
            })
            .collect()
    };

    let errors: Vec<_> = results
        .into_iter()
        .filter_map(|(file, result)| result.err().map(|e| (file, e)))
        .collect();

    if !errors.is_empty() {
        eprintln!("\nFailed to process {} file(s):", errors.len());
        for (idx, (file, e)) in errors.iter().enumerate() {
            eprintln!("\n{}. File: {}", idx + 1, file.display());
            report(file, e);
        }
        std::process::exit(1);
    }
}

fn timed<F>(options: &Options, file: &Path, convert: F) -> Result<(), Error>
where
    F: FnOnce() -> Result<(), Error>,
{
    let now = Instant::now();
    let result = convert();
    if options.timings() && result.is_ok() {
        eprintln!("  Converted {} in {}", file.display(), now.elapsed().pretty_print());
    }
    result
}

fn report(file: &Path, e: &Error) {
    // Only malformed JSON can be pointed at, and only if the file is still readable
    let source = matches!(e, Error::Tree(rd_tree::Error::Json(_)))
        .then(|| std::fs::read_to_string(file).ok())
        .flatten();
    let name = file.display().to_string();
    let context = source.as_deref().map(|source| (name.as_str(), source));
    eprintln!("{:?}", error::display(e, context));
}
