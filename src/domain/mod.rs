//! Domain layer - Review data model and state transitions

pub mod entry;
pub mod place_type;
pub mod rating;
pub mod store;
pub mod validator;
pub mod vibe;

pub use entry::{Draft, DraftField, Entry, EntryId, EntryInput};
pub use place_type::PlaceType;
pub use rating::Rating;
pub use store::EntryStore;
pub use validator::DraftValidator;
pub use vibe::{Vibe, VibeSet};
