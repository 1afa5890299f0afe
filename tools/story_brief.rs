/// Story Brief — prints the narrative brief for the built-in statistic.
///
/// Usage: story_brief

use std::io::{self, Write};
use std::process;

use story_brief::core::pipeline::{generate_story_brief_to, to_pretty_json, PipelineError};
use story_brief::schema::guidance::{guidance_principles, STATISTIC};
use tracing::Level;

fn main() {
    // stdout carries the brief, so diagnostics go to stderr. The level is
    // fixed because the tool takes no flags or environment variables.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "--- Starting Data-to-Story Brief Generator ---\n")?;
    let brief = generate_story_brief_to(STATISTIC, &guidance_principles(), &mut out)?;
    writeln!(out, "--- Script Complete ---\n")?;

    writeln!(out, "Final Generated Story Brief (JSON format):")?;
    writeln!(out, "-------------------------------------------")?;
    writeln!(out, "{}", to_pretty_json(&brief)?)?;
    out.flush()?;

    Ok(())
}
