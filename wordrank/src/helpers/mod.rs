pub mod config;
pub mod counter;
