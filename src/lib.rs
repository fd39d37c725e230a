//! brewlog - Terminal log of coffee shop reviews
//!
//! Entries live in memory for one session. The crate is split into the review
//! data model (`domain`), the form/session use case (`application`), config
//! loading (`infrastructure`) and the line-driven terminal front end (`cli`).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BrewlogError;
