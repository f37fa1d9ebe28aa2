pub mod classifier;
pub mod submission;
