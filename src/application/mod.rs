//! Application layer - Use cases and orchestration

pub mod session;

pub use session::{FormState, ReviewSession, SubmitOutcome};
