use serde::{Deserialize, Serialize};

/// The three narrative elements read out of a statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredElements {
    pub human_goal: String,
    pub obstacle: String,
    pub impact: String,
}

impl InferredElements {
    pub fn new(human_goal: &str, obstacle: &str, impact: &str) -> Self {
        Self {
            human_goal: human_goal.to_string(),
            obstacle: obstacle.to_string(),
            impact: impact.to_string(),
        }
    }

    /// Field names paired with their values, in serialization order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("human_goal", self.human_goal.as_str()),
            ("obstacle", self.obstacle.as_str()),
            ("impact", self.impact.as_str()),
        ]
    }
}

/// The complete brief handed to a creative team.
///
/// Field order here is the key order of the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryBrief {
    pub source_statistic: String,
    pub guidance_applied: Vec<String>,
    pub narrative_brief: InferredElements,
}
