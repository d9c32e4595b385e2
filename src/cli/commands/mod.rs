pub mod config;
pub mod examples;
pub mod generate;
