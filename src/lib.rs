//! Story Brief — turns a quantitative statistic into a narrative brief.
//!
//! A two-step pipeline: keyword inference reads a human goal, obstacle and
//! impact out of the statistic, then assembly packages them with the
//! statistic and the house guidance into a `StoryBrief` ready for JSON.

pub mod core;
pub mod schema;
