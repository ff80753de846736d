use clap::Parser;
use firebreak_core::{find_optimal_cover, save_forest, SearchParams, DEFAULT_SNAPSHOT_PATH};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Forest fire Monte Carlo simulator
#[derive(Parser, Debug)]
#[command(name = "firebreak")]
#[command(
    about = "Finds the densest forest cover that keeps wildfire damage under an acceptable burn rate",
    long_about = None
)]
struct Args {
    /// Forest width in cells
    #[arg(short = 'x', long, default_value_t = 10)]
    width: usize,

    /// Forest height in cells
    #[arg(short = 'y', long, default_value_t = 10)]
    height: usize,

    /// Max acceptable average burn rate percentage [1-100]
    #[arg(short = 'm', long = "max-burn", default_value_t = 30)]
    max_burn: u8,

    /// Output path for the burnt forest snapshot
    #[arg(short = 'o', long, default_value = DEFAULT_SNAPSHOT_PATH)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!(
        "started calculations for forest with dimensions {}x{} and max acceptable burn rate {}%...",
        args.width, args.height, args.max_burn
    );

    let params = SearchParams::new(args.width, args.height, args.max_burn);
    let result = match find_optimal_cover(&params) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "optimal forest cover percentage is: {}% with average burn rate of: {}%",
        result.cover_percent, result.average_burn_rate
    );

    if let Some(forest) = result.showcase {
        match save_forest(&forest, &args.output) {
            Ok(()) => println!(
                "saved to {} a sample burnt forest with the optimal cover percentage",
                args.output.display()
            ),
            Err(e) => eprintln!("failed to save forest snapshot: {e}"),
        }
    } else {
        println!("no forest cover percentage stayed within the cap; no snapshot written");
    }

    ExitCode::SUCCESS
}
