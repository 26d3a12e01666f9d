pub mod jitter;
pub mod samples;
