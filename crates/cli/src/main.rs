//! tweetsample CLI
//!
//! Selects a uniform random subset of labeled tweets from a CSV file and
//! writes the selection, projected to a fixed set of columns, to a new CSV
//! file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tweetsample_core::{rng_from_seed, sample};
use tweetsample_formats::{read_dataset, CsvWriter, Error as FormatError};

/// Columns written to the output file, in order
const OUTPUT_COLUMNS: [&str; 3] = ["textID", "text", "sentiment"];

#[derive(Parser, Debug)]
#[command(name = "tweetsample")]
#[command(version, about = "Select random tweets from a CSV file", long_about = None)]
struct Cli {
    /// Path to the input CSV file
    #[arg(long, default_value = "example_tweets.csv")]
    input: PathBuf,

    /// Path to write the sampled tweets
    #[arg(long, default_value = "sampled_tweets.csv")]
    output: PathBuf,

    /// Number of tweets to select
    #[arg(long, default_value_t = 20)]
    count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let written = run(&cli)?;
    println!("Wrote {} tweets to '{}'.", written, cli.output.display());

    Ok(())
}

/// Load the dataset, draw the sample, and write the projected output.
///
/// Returns the number of records written.  The output file is only created
/// once the input has loaded and proven non-empty, so the fatal error paths
/// leave no file behind.
fn run(cli: &Cli) -> Result<usize> {
    info!("Sampling tweets");
    info!("  Input: {:?}", cli.input);
    info!("  Output: {:?}", cli.output);
    info!("  Count: {}", cli.count);
    info!("  Seed: {:?}", cli.seed);

    let dataset = read_dataset(&cli.input)?;
    if dataset.is_empty() {
        return Err(FormatError::EmptyInput.into());
    }
    info!("Loaded {} records", dataset.len());

    let mut rng = rng_from_seed(cli.seed);
    let sampled = sample(dataset, cli.count, &mut rng);

    let mut writer = CsvWriter::open(&cli.output, &OUTPUT_COLUMNS)?;
    for record in &sampled {
        writer.write_record(record)?;
    }
    let written = writer.records_written();
    writer.close()?;

    Ok(written)
}
