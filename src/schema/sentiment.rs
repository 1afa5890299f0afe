use serde::{Deserialize, Serialize};

/// The direction a statistic moved, as far as the keyword rules can tell.
///
/// Sentiment is the only thing inference decides. Everything else in a
/// brief is either passed through or looked up from the matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Returns the tag string for this sentiment (e.g., "sentiment:negative").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Positive => "sentiment:positive",
            Self::Negative => "sentiment:negative",
        }
    }
}
