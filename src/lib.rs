pub mod config;
pub mod error;
pub mod filename;
pub mod processor;
