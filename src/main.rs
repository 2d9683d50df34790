use anyhow::{bail, Context, Result};
use athyg::{
    export,
    process::{LoadOptions, Loader, TracingProgress},
    schema::{Record, Version, V1, V2, V3},
};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Deserialize AT-HYG star catalog files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load catalog files and write the records out
    Load(LoadArgs),
    /// Print the column layout of a dataset version
    Columns {
        #[arg(short, long)]
        dataset: Version,
    },
}

#[derive(clap::Args)]
struct LoadArgs {
    /// Dataset version of every input file (v1, v2, v3)
    #[arg(short, long)]
    dataset: Version,
    /// JSON file with loader options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Field delimiter, overrides the config file
    #[arg(long)]
    delimiter: Option<char>,
    /// Parse files concurrently
    #[arg(long)]
    parallel: bool,
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
    /// Output file; stdout when omitted (required for parquet)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Input files or glob patterns, loaded in the order given
    #[arg(required = true)]
    paths: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Json,
    Parquet,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Columns { dataset } => {
            let mut out = io::stdout().lock();
            for (idx, col) in dataset.columns().iter().enumerate() {
                writeln!(out, "{:>2} {:<10} {}", idx + 1, col.name, col.kind)?;
            }
            Ok(())
        }
        Command::Load(args) => {
            // ─── 2) resolve options: defaults < config file < flags ──────
            let mut options = match &args.config {
                Some(path) => LoadOptions::from_json_file(path)?,
                None => LoadOptions::default(),
            };
            if let Some(delimiter) = args.delimiter {
                options.delimiter = delimiter;
            }
            options.parallel |= args.parallel;
            debug!(?options, "resolved load options");

            // ─── 3) expand inputs ────────────────────────────────────────
            let paths = expand_paths(&args.paths)?;
            info!("{} files to load as ATHYG {}", paths.len(), args.dataset);

            // ─── 4) load + export ────────────────────────────────────────
            match args.dataset {
                Version::V1 => run::<V1>(&args, &options, &paths),
                Version::V2 => run::<V2>(&args, &options, &paths),
                Version::V3 => run::<V3>(&args, &options, &paths),
            }
        }
    }
}

/// Expand glob patterns in argument order; each pattern's matches are
/// sorted. Plain paths pass through untouched so a missing file surfaces
/// as an invalid path from the loader.
fn expand_paths(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(args.len());
    for arg in args {
        if !arg.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(arg));
            continue;
        }
        let mut matched: Vec<PathBuf> = glob(arg)
            .with_context(|| format!("invalid glob pattern {}", arg))?
            .filter_map(Result::ok)
            .collect();
        if matched.is_empty() {
            bail!("pattern {} matched no files", arg);
        }
        matched.sort();
        paths.extend(matched);
    }
    Ok(paths)
}

fn run<R>(args: &LoadArgs, options: &LoadOptions, paths: &[PathBuf]) -> Result<()>
where
    R: Record + Serialize + Send,
{
    let loader = Loader::new()
        .with_options(options)
        .with_progress(TracingProgress);

    let start = Instant::now();
    let records: Vec<R> = if options.parallel {
        loader.load_parallel(paths)?
    } else {
        loader.load(paths)?
    };
    info!(records = records.len(), elapsed = ?start.elapsed(), "loaded");

    match args.format {
        Format::Summary => {
            let mut out = output(args)?;
            write!(out, "{}", export::summarize(&records))?;
            out.flush()?;
        }
        Format::Json => export::write_json_lines(&records, output(args)?)?,
        Format::Parquet => {
            let Some(path) = &args.output else {
                bail!("--output is required for parquet");
            };
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            export::write_parquet(&records, BufWriter::new(file))?;
            info!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn output(args: &LoadArgs) -> Result<Box<dyn Write>> {
    Ok(match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
