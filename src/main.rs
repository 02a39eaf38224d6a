use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use columnar_frame::{ColumnType, Config, DataFrame, FrameError, Workers, read_csv_file, stat};
use log::{Level, error, info};

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Loads a CSV file into a columnar frame and prints a window of it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// CSV file to load
    path: PathBuf,
    /// JSON file with a frame configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Use the first record as column names
    #[arg(long)]
    header: bool,
    /// Comma separated column names (ignored with --header)
    #[arg(long, value_delimiter = ',')]
    names: Option<Vec<String>>,
    /// Comma separated column types, e.g. `text,numeric`
    #[arg(short, long)]
    types: Option<String>,
    /// Number of row chunks per parallel operation
    #[arg(short, long)]
    workers: Option<usize>,
    /// Print only the first N rows
    #[arg(long, conflicts_with = "tail")]
    head: Option<usize>,
    /// Print only the last N rows
    #[arg(long)]
    tail: Option<usize>,
    /// Numeric columns to summarize with count / sum / mean
    #[arg(short, long, value_delimiter = ',')]
    stats: Vec<String>,
    /// One of error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn load_config(opts: &Opts) -> Result<Config, FrameError> {
    let mut config = match &opts.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(types) = &opts.types {
        config.column_types = ColumnType::parse_list(types)?;
    }
    if let Some(names) = &opts.names {
        config.column_names = Some(names.clone());
    }
    if opts.header {
        config.first_row_is_header = true;
    }
    if let Some(n) = opts.workers {
        config.workers = Workers::new(n)?;
    }
    Ok(config)
}

fn run(opts: &Opts) -> Result<(), FrameError> {
    let config = load_config(opts)?;
    let df = read_csv_file(&opts.path, &config)?;
    info!(
        "loaded {} rows x {} columns from {}",
        df.row_count(),
        df.column_count(),
        opts.path.display()
    );

    let view: DataFrame = match (opts.head, opts.tail) {
        (Some(n), _) => df.head(n),
        (None, Some(n)) => df.tail(n),
        (None, None) => df.clone(),
    };
    println!("{view}");

    for name in &opts.stats {
        let values = view.numeric_column(name)?;
        println!(
            "{name}: count={} sum={:.8} mean={:.8}",
            stat::count(&values, view.workers()),
            stat::sum(&values, view.workers()),
            stat::mean(&values, view.workers())
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    if let Err(e) = simple_logger::init_with_level(opts.log_level) {
        eprintln!("could not initialize logger: {e}");
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
