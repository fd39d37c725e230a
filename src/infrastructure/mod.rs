//! Infrastructure layer - Configuration loading

pub mod config;

pub use config::{Config, SeedEntry, CONFIG_ENV};
