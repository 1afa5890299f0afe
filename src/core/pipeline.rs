/// The brief pipeline: Statistic → StoryBrief orchestration.
///
/// Runs keyword inference, then assembles the inferred elements together
/// with the statistic and guidance into a `StoryBrief`, reporting progress
/// to a writer as it goes.

use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::core::inference::{InferenceError, InferenceRules};
use crate::schema::brief::{InferredElements, StoryBrief};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns statistics into story briefs. Built via `BriefGenerator::builder()`.
#[derive(Debug, Clone, Default)]
pub struct BriefGenerator {
    rules: InferenceRules,
}

/// Builder for constructing a `BriefGenerator`.
#[derive(Debug, Default)]
pub struct BriefGeneratorBuilder {
    rules_path: Option<String>,
    /// Directly provided rules (for testing without files).
    rules: Option<InferenceRules>,
}

impl BriefGenerator {
    pub fn builder() -> BriefGeneratorBuilder {
        BriefGeneratorBuilder::default()
    }

    pub fn rules(&self) -> &InferenceRules {
        &self.rules
    }

    /// Build a brief without reporting progress.
    pub fn assemble(&self, statistic: &str, guidance: &[String]) -> StoryBrief {
        let elements = self.rules.infer(statistic);
        brief_from(statistic, guidance, elements)
    }

    /// Build a brief, writing step-by-step progress to `out`.
    ///
    /// Guidance is carried into the brief verbatim; it never affects
    /// inference.
    pub fn generate<W: Write>(
        &self,
        statistic: &str,
        guidance: &[String],
        out: &mut W,
    ) -> Result<StoryBrief, PipelineError> {
        // 1. Infer narrative elements
        writeln!(out, "Step 1: Analyzing statistic to infer narrative elements...")?;
        let elements = self.rules.infer(statistic);
        writeln!(out, "  -> Inferred Goal: {}", elements.human_goal)?;
        writeln!(out, "  -> Inferred Obstacle: {}", elements.obstacle)?;
        writeln!(out, "  -> Inferred Impact: {}", elements.impact)?;
        writeln!(out, "\n")?;

        // 2. Assemble the brief
        writeln!(
            out,
            "Step 2: Assembling elements into a final structured story brief..."
        )?;
        let brief = brief_from(statistic, guidance, elements);
        tracing::debug!(
            guidance = brief.guidance_applied.len(),
            "story brief assembled"
        );
        writeln!(out, "  -> Brief generation complete.\n")?;

        Ok(brief)
    }
}

impl BriefGeneratorBuilder {
    /// Read the rule table from a RON file instead of using the built-in one.
    pub fn rules_file(mut self, path: &str) -> Self {
        self.rules_path = Some(path.to_string());
        self
    }

    /// Provide rules directly (for testing without files).
    pub fn with_rules(mut self, rules: InferenceRules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn build(self) -> Result<BriefGenerator, PipelineError> {
        // Directly provided rules override a rules file
        let rules = match (self.rules, self.rules_path) {
            (Some(rules), _) => {
                rules.validate()?;
                rules
            }
            (None, Some(path)) => InferenceRules::load_from_ron(Path::new(&path))?,
            (None, None) => InferenceRules::default(),
        };

        tracing::debug!(rules = rules.rules.len(), "brief generator ready");
        Ok(BriefGenerator { rules })
    }
}

fn brief_from(statistic: &str, guidance: &[String], elements: InferredElements) -> StoryBrief {
    StoryBrief {
        source_statistic: statistic.to_string(),
        guidance_applied: guidance.to_vec(),
        narrative_brief: elements,
    }
}

/// Build a brief with the built-in rules, reporting progress to `out`.
pub fn generate_story_brief_to<W: Write>(
    statistic: &str,
    guidance: &[String],
    out: &mut W,
) -> Result<StoryBrief, PipelineError> {
    BriefGenerator::default().generate(statistic, guidance, out)
}

/// Build a brief with the built-in rules, reporting progress on stdout.
pub fn generate_story_brief(
    statistic: &str,
    guidance: &[String],
) -> Result<StoryBrief, PipelineError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_story_brief_to(statistic, guidance, &mut out)
}

/// Render a brief as JSON with two-space indentation.
pub fn to_pretty_json(brief: &StoryBrief) -> Result<String, PipelineError> {
    Ok(serde_json::to_string_pretty(brief)?)
}
