//! Submission gate for drafts
//!
//! Only the place name and location are required. Rating, price, vibes and
//! note never block a submission.

use crate::domain::{Draft, DraftField};

pub struct DraftValidator;

impl DraftValidator {
    /// True when place and location are both non-blank
    pub fn is_submittable(draft: &Draft) -> bool {
        Self::missing_fields(draft).is_empty()
    }

    /// Required fields that are still blank, in form order
    pub fn missing_fields(draft: &Draft) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if draft.place.trim().is_empty() {
            missing.push(DraftField::Place);
        }
        if draft.location.trim().is_empty() {
            missing.push(DraftField::Location);
        }
        missing
    }
}
