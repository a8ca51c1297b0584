use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing::{info, warn};

use fastq_quality_trimmer::config::DEFAULT_WINDOW_SIZE;
use fastq_quality_trimmer::fastq_io::derive_output_path;
use fastq_quality_trimmer::report::{Report, RunBanner};
use fastq_quality_trimmer::runner::trim_file;
use fastq_quality_trimmer::TrimConfig;

#[derive(Parser)]
#[command(name = "fastq-quality-trimmer")]
#[command(about = "Trim low-quality bases from FASTQ files")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["base_threshold", "window_threshold"])
))]
struct Args {
    #[arg(help = "Input FASTQ file (.gz supported)")]
    input: PathBuf,

    #[arg(long, help = "Quality threshold for base-by-base trimming")]
    base_threshold: Option<i32>,

    #[arg(long, help = "Average quality threshold for window-based trimming")]
    window_threshold: Option<i32>,

    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE, help = "Window size for window-based trimming")]
    window_size: usize,

    #[arg(short = 'o', long, help = "Output FASTQ file (default: <input>_trimmed.fastq)")]
    output: Option<PathBuf>,

    #[arg(short = 'b', long, default_value = "10000", help = "Records per write batch")]
    batch_size: usize,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose logging")]
    verbose: bool,

    #[arg(short = 'q', long, default_value = "false", help = "Omit per-sequence trimming details")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .init();

    let config = TrimConfig::from_options(args.base_threshold, args.window_threshold, args.window_size)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input));

    print!("{}", RunBanner { input: &args.input, config: &config });
    info!(input = %args.input.display(), output = %output.display(), "starting trimming run");

    let stats = trim_file(&args.input, &output, config, args.batch_size).with_context(|| {
        format!(
            "Failed to trim {} into {}",
            args.input.display(),
            output.display()
        )
    })?;

    info!(
        total = stats.total_sequences,
        discarded = stats.discarded_sequences,
        "trimming run finished"
    );
    if stats.kept_sequences() == 0 {
        warn!("no reads survived trimming");
    }

    println!();
    print!(
        "{}",
        Report {
            stats: &stats,
            output: &output,
            show_details: !args.quiet,
        }
    );

    Ok(())
}
