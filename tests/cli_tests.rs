/// End-to-end tests for the `story_brief` binary.

use std::process::Command;

use story_brief::schema::brief::StoryBrief;
use story_brief::schema::guidance::{GUIDANCE_PRINCIPLES, STATISTIC};

const JSON_HEADER: &str =
    "Final Generated Story Brief (JSON format):\n-------------------------------------------\n";

fn run_story_brief() -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_story_brief"))
        .output()
        .expect("failed to run story_brief");
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    (output.status.success(), stdout)
}

#[test]
fn exits_successfully() {
    let (success, _) = run_story_brief();
    assert!(success);
}

#[test]
fn progress_precedes_json() {
    let (_, stdout) = run_story_brief();
    assert!(stdout.starts_with("--- Starting Data-to-Story Brief Generator ---\n\n"));

    let step1 = stdout.find("Step 1: Analyzing statistic").unwrap();
    let step2 = stdout.find("Step 2: Assembling elements").unwrap();
    let complete = stdout.find("--- Script Complete ---").unwrap();
    let header = stdout.find(JSON_HEADER).unwrap();
    assert!(step1 < step2 && step2 < complete && complete < header);

    assert!(stdout.contains("  -> Inferred Goal: To grow our community of active supporters\n"));
}

#[test]
fn prints_parseable_brief() {
    let (_, stdout) = run_story_brief();
    let (_, json) = stdout.split_once(JSON_HEADER).unwrap();

    let brief: StoryBrief = serde_json::from_str(json).unwrap();
    assert_eq!(brief.source_statistic, STATISTIC);
    assert_eq!(brief.guidance_applied, GUIDANCE_PRINCIPLES.to_vec());
    assert_eq!(
        brief.narrative_brief.impact,
        "More people are now actively participating in our mission."
    );
    assert!(json.starts_with("{\n  \"source_statistic\""));
    assert!(json.ends_with("}\n"));
}
