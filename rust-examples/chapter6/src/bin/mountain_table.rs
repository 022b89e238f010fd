//! Chapter 6 demo: lay out a table of records
//!
//! Run with: cargo run --bin mountain-table -- [--data records.json] [--style style.json] [--stretch 8x2]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use eloquent_chapter6::exercise_6_2::{
    TableStyle, data_table_with, mountains, parse_table_records, render_with, stretch_rows,
};

#[derive(Debug, Parser)]
#[command(name = "mountain-table", about = "Render flat JSON records as an aligned table")]
struct Args {
    /// JSON array of flat records; defaults to the embedded mountains
    #[arg(long, env = "ELOQUENT_DATA")]
    data: Option<PathBuf>,

    /// JSON table style, e.g. {"column_separator": " | "}
    #[arg(long)]
    style: Option<PathBuf>,

    /// Minimum size of every body cell, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    stretch: Option<(usize, usize)>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

fn read(path: &Path) -> Result<String, eloquent_common::Error> {
    fs::read_to_string(path).map_err(|source| eloquent_common::Error::Io {
        path: path.to_path_buf(),
        source,
    })
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
    let style = match &args.style {
        Some(path) => TableStyle::from_json(&read(path)?)?,
        None => TableStyle::default(),
    };
    let records = match &args.data {
        Some(path) => parse_table_records(&read(path)?)?,
        None => mountains()?,
    };
    tracing::info!(records = records.len(), "records loaded");

    let mut grid = data_table_with(&records, &style)?;
    if let Some((width, height)) = args.stretch {
        grid = stretch_rows(grid, 1, width, height);
    }

    println!("{}", render_with(&grid, &style)?);
    Ok(())
}
