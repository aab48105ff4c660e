//! Stat report generator: tournament JSON in, report files out.
//! Run with: cargo run --bin reports -- tournament.json [out_dir]
//!
//! This binary is the external collaborator that owns file I/O; the library
//! core only ever returns in-memory pages.

use log::info;
use quizbowl_stats::reports::{csv_export, HtmlReportGenerator};
use quizbowl_stats::Tournament;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: reports <tournament.json> [out_dir]");
        return ExitCode::FAILURE;
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".into()));

    match run(&input, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, out_dir: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(input)?;
    let mut tournament: Tournament = serde_json::from_str(&json)?;
    info!(
        "loaded tournament {:?} with {} team(s)",
        tournament.name,
        tournament.number_of_teams()
    );

    tournament.compile_stats();

    std::fs::create_dir_all(out_dir)?;
    let generator = HtmlReportGenerator::new(&tournament);
    for page in generator.generate_all() {
        let path = out_dir.join(&page.file_name);
        std::fs::write(&path, &page.content)?;
        info!("wrote {} ({})", path.display(), page.title);
    }

    std::fs::write(out_dir.join("standings.csv"), csv_export::standings_csv(&tournament)?)?;
    std::fs::write(
        out_dir.join("individuals.csv"),
        csv_export::individuals_csv(&tournament)?,
    )?;
    info!("wrote CSV exports");

    Ok(())
}
