//! Built-in inputs for the `story_brief` tool.

/// The key performance indicator the tool narrates.
pub const STATISTIC: &str = "Monthly active supporters increased by 15% in Q3.";

/// House-style messaging guidelines, carried into every brief unchanged.
pub const GUIDANCE_PRINCIPLES: [&str; 3] = [
    "Focus on the supporter's journey.",
    "Frame challenges as opportunities for engagement.",
    "Highlight the direct impact of our work.",
];

/// Owned copy of [`GUIDANCE_PRINCIPLES`].
pub fn guidance_principles() -> Vec<String> {
    GUIDANCE_PRINCIPLES.iter().map(|s| s.to_string()).collect()
}
