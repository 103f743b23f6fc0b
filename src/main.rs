use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

/// Estimate pi by Monte Carlo sampling on a local data-parallel executor
#[derive(Parser)]
#[command(name = "montepi")]
#[command(about = "Estimate pi by Monte Carlo sampling", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the estimation (default command)
    Run {
        /// Total number of trials (default: 1000000)
        #[arg(short = 'n', long)]
        samples: Option<u64>,

        /// Parallel worker tasks (default: available parallelism)
        #[arg(short = 'w', long)]
        workers: Option<usize>,

        /// Base RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Where to persist the result: a file path or an s3://bucket/key URI
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Application name for the execution context
        #[arg(long)]
        name: Option<String>,

        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,aws_config=debug", // -vvv shows everything including dependencies
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("montepi started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Some(Commands::Run {
            samples,
            workers,
            seed,
            output,
            name,
            config,
        }) => {
            run_estimation(samples, workers, seed, output, name, config).await
        }
        None => {
            // Default to run command with default values
            run_estimation(None, None, None, None, None, None).await
        }
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_estimation(
    samples: Option<u64>,
    workers: Option<usize>,
    seed: Option<u64>,
    output: Option<String>,
    name: Option<String>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let run_cmd = montepi::run::RunCommand {
        samples,
        workers,
        seed,
        output,
        name,
        config,
    };
    montepi::run::run(run_cmd).await
}
