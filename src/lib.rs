pub mod engine;
pub mod ladders;
mod misc;
