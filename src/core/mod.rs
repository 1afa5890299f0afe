pub mod inference;
pub mod pipeline;
