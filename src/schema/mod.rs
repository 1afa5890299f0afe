pub mod brief;
pub mod guidance;
pub mod sentiment;
