use clap::Parser;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes a synthetic CSV for trying out and benchmarking frames.
///
/// Columns: `id,value,category,region,price`. About 1 in 20 `value` cells is
/// left empty; `price` is text like `$12.34`, meant to be derived into a
/// numeric column.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    #[arg(default_value = "data/data.csv")]
    path: PathBuf,
    #[arg(short, long, default_value_t = 1_000_000)]
    rows: usize,
}

fn main() -> std::io::Result<()> {
    let opts = Opts::parse();
    if let Some(dir) = opts.path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = File::create(&opts.path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "id,value,category,region,price")?;

    let mut rng = rand::rng();
    for i in 0..opts.rows {
        let category = ['A', 'B', 'C', 'D'][rng.random_range(0..4)];
        let region =
            ["US", "EU", "ASIA", "AFRICA", "AUSTRALIA", "SOUTH AMERICA"][rng.random_range(0..6)];
        let price = rng.random_range(1..100_000) as f64 / 100.0;
        if rng.random_range(0..20) == 0 {
            writeln!(writer, "{},,{},{},${:.2}", i, category, region, price)?;
        } else {
            let value: f64 = rng.random_range(-1000.0..1000.0);
            writeln!(writer, "{},{:.4},{},{},${:.2}", i, value, category, region, price)?;
        }
    }
    writer.flush()?;

    println!("Sample CSV generated: {}", opts.path.display());
    Ok(())
}
