//! Chapter 5 demo: statistics over the genealogy
//!
//! Run with: cargo run --bin ancestry-stats -- [--data people.json] [-v]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eloquent_chapter5::exercise_5_2::average_mother_age_difference;
use eloquent_chapter5::exercise_5_3::{average_age_by_century, format_century_averages};
use eloquent_common::dataset::ancestry_from;

#[derive(Debug, Parser)]
#[command(name = "ancestry-stats", about = "Statistics over a genealogy dataset")]
struct Args {
    /// JSON array of people; defaults to the embedded genealogy
    #[arg(long, env = "ELOQUENT_DATA")]
    data: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    eloquent_common::logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let people = ancestry_from(args.data.as_deref())?;
    tracing::info!(people = people.len(), "genealogy loaded");

    println!("=== Exercise 5.2: Mother-child age difference ===");
    match average_mother_age_difference(&people) {
        Some(avg) => println!("{avg:.1}"),
        None => println!("no one has a known mother"),
    }

    println!();
    println!("=== Exercise 5.3: Historical life expectancy ===");
    println!("{}", format_century_averages(&average_age_by_century(&people)));

    Ok(())
}
