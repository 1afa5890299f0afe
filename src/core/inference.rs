//! Keyword inference — reads goal, obstacle and impact out of a statistic.
//!
//! This is a rule table, not language understanding: the first rule whose
//! keyword occurs in the statistic (case-insensitively) supplies the
//! narrative elements, and anything unmatched falls back to the default
//! triple.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::brief::InferredElements;
use crate::schema::sentiment::Sentiment;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),
    #[error("rule {0} has an empty keyword")]
    EmptyKeyword(usize),
    #[error("keyword '{0}' has leading or trailing whitespace")]
    PaddedKeyword(String),
    #[error("{rule} has an empty '{field}' field")]
    EmptyField { rule: String, field: &'static str },
    #[error("keyword '{0}' appears in more than one rule")]
    DuplicateKeyword(String),
}

const DECREASED_KEYWORD: &str = "decreased";

const GROWTH_GOAL: &str = "To grow our community of active supporters";
const GROWTH_OBSTACLE: &str = "Supporters were previously unengaged or unaware of opportunities.";
const GROWTH_IMPACT: &str = "More people are now actively participating in our mission.";

const DECLINE_GOAL: &str = "To re-engage our supporter base";
const DECLINE_OBSTACLE: &str = "Recent events or lack of outreach caused a drop in engagement.";
const DECLINE_IMPACT: &str = "We need a new strategy to win back our supporters' attention.";

/// A keyword and the narrative it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub sentiment: Sentiment,
    pub elements: InferredElements,
}

/// An ordered keyword table with a fallback triple.
///
/// Rules are tried in order; a statistic that matches none of them reads
/// as [`Sentiment::Positive`] and gets `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRules {
    pub rules: Vec<KeywordRule>,
    pub fallback: InferredElements,
}

impl Default for InferenceRules {
    /// The built-in table: "decreased" reads as a decline, everything else
    /// as growth.
    fn default() -> Self {
        Self {
            rules: vec![KeywordRule {
                keyword: DECREASED_KEYWORD.to_string(),
                sentiment: Sentiment::Negative,
                elements: InferredElements::new(DECLINE_GOAL, DECLINE_OBSTACLE, DECLINE_IMPACT),
            }],
            fallback: InferredElements::new(GROWTH_GOAL, GROWTH_OBSTACLE, GROWTH_IMPACT),
        }
    }
}

impl InferenceRules {
    /// Load a rule table from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<InferenceRules, InferenceError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse and validate a rule table from a RON string.
    pub fn parse_ron(input: &str) -> Result<InferenceRules, InferenceError> {
        let rules: InferenceRules = ron::from_str(input)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Pretty-printed RON for this table.
    pub fn to_ron(&self) -> Result<String, InferenceError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Check that every keyword is non-empty, unpadded and unique
    /// (ignoring case), and that no rule could produce an empty narrative
    /// field.
    pub fn validate(&self) -> Result<(), InferenceError> {
        let mut seen = FxHashSet::default();
        for (i, rule) in self.rules.iter().enumerate() {
            let trimmed = rule.keyword.trim();
            if trimmed.is_empty() {
                return Err(InferenceError::EmptyKeyword(i));
            }
            if trimmed.len() != rule.keyword.len() {
                return Err(InferenceError::PaddedKeyword(rule.keyword.clone()));
            }
            if !seen.insert(rule.keyword.to_lowercase()) {
                return Err(InferenceError::DuplicateKeyword(rule.keyword.clone()));
            }
            check_fields(&format!("rule '{}'", rule.keyword), &rule.elements)?;
        }
        check_fields("fallback", &self.fallback)
    }

    /// Classify a statistic without building the narrative.
    pub fn classify(&self, statistic: &str) -> Sentiment {
        self.matching_rule(statistic)
            .map(|rule| rule.sentiment)
            .unwrap_or(Sentiment::Positive)
    }

    /// Infer the narrative elements for a statistic.
    pub fn infer(&self, statistic: &str) -> InferredElements {
        match self.matching_rule(statistic) {
            Some(rule) => {
                tracing::debug!(
                    keyword = %rule.keyword,
                    sentiment = rule.sentiment.tag(),
                    "keyword rule matched"
                );
                rule.elements.clone()
            }
            None => {
                tracing::debug!("no keyword rule matched, using fallback");
                self.fallback.clone()
            }
        }
    }

    fn matching_rule(&self, statistic: &str) -> Option<&KeywordRule> {
        let lowered = statistic.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(&rule.keyword.to_lowercase()))
    }
}

fn check_fields(rule: &str, elements: &InferredElements) -> Result<(), InferenceError> {
    for (field, value) in elements.fields() {
        if value.trim().is_empty() {
            return Err(InferenceError::EmptyField {
                rule: rule.to_string(),
                field,
            });
        }
    }
    Ok(())
}

/// Infer narrative elements with the built-in table.
pub fn infer_narrative(statistic: &str) -> InferredElements {
    InferenceRules::default().infer(statistic)
}

/// Classify a statistic with the built-in table.
pub fn classify(statistic: &str) -> Sentiment {
    InferenceRules::default().classify(statistic)
}
