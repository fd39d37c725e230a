//! Review session use case
//!
//! Maps form events onto the entry store and tracks whether the add form is
//! open. Rendering re-reads `entries()` and `draft()` after every event.

use crate::domain::{Draft, DraftField, DraftValidator, Entry, EntryId, EntryStore, Vibe};
use crate::error::{BrewlogError, Result};

/// Whether the add form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Editing,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry was stored and the form closed
    Committed(Entry),
    /// Required fields are blank; the form stays open
    Incomplete(Vec<DraftField>),
}

#[derive(Debug, Default)]
pub struct ReviewSession {
    store: EntryStore,
    form: FormState,
}

impl ReviewSession {
    pub fn new() -> Self {
        ReviewSession {
            store: EntryStore::new(),
            form: FormState::Idle,
        }
    }

    /// Commit start-up entries without going through the form
    pub fn seed(&mut self, drafts: Vec<Draft>) {
        for draft in drafts {
            self.store.add(draft);
        }
        tracing::debug!(count = self.store.len(), "session seeded");
    }

    /// Open the add form. An already open form keeps its draft.
    pub fn open_form(&mut self) -> &Draft {
        if self.form == FormState::Idle {
            self.store.reset_draft();
            self.form = FormState::Editing;
        }
        self.store.draft()
    }

    pub fn on_field_change(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.ensure_editing()?;
        self.store.draft_mut().set_field(field, value)
    }

    /// Returns whether the vibe is selected afterwards
    pub fn on_toggle_vibe(&mut self, vibe: Vibe) -> Result<bool> {
        self.ensure_editing()?;
        Ok(self.store.draft_mut().vibes.toggle(vibe))
    }

    pub fn on_submit(&mut self) -> Result<SubmitOutcome> {
        self.ensure_editing()?;

        match self.store.commit_draft() {
            Some(entry) => {
                self.form = FormState::Idle;
                Ok(SubmitOutcome::Committed(entry))
            }
            None => {
                let missing = DraftValidator::missing_fields(self.store.draft());
                tracing::debug!(?missing, "submit rejected");
                Ok(SubmitOutcome::Incomplete(missing))
            }
        }
    }

    /// Discard the draft and close the form. Returns whether a form was open.
    pub fn on_cancel(&mut self) -> bool {
        let was_open = self.form == FormState::Editing;
        self.store.reset_draft();
        self.form = FormState::Idle;
        was_open
    }

    pub fn on_delete(&mut self, id: EntryId) -> bool {
        self.store.remove(id)
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.store.get(id)
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.list()
    }

    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    fn ensure_editing(&self) -> Result<()> {
        match self.form {
            FormState::Editing => Ok(()),
            FormState::Idle => Err(BrewlogError::FormClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlaceType;

    fn fill(session: &mut ReviewSession, place: &str, location: &str) {
        session.open_form();
        session.on_field_change(DraftField::Place, place).unwrap();
        session.on_field_change(DraftField::Location, location).unwrap();
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let session = ReviewSession::new();
        assert_eq!(session.form_state(), FormState::Idle);
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_edits_require_open_form() {
        let mut session = ReviewSession::new();

        assert!(matches!(
            session.on_field_change(DraftField::Place, "Kofra"),
            Err(BrewlogError::FormClosed)
        ));
        assert!(matches!(
            session.on_toggle_vibe(Vibe::Chill),
            Err(BrewlogError::FormClosed)
        ));
        assert!(matches!(session.on_submit(), Err(BrewlogError::FormClosed)));
    }

    #[test]
    fn test_full_add_flow() {
        let mut session = ReviewSession::new();
        fill(&mut session, "Kofra", "Upper St Giles");
        session.on_field_change(DraftField::Type, "coffee shop").unwrap();
        session.on_field_change(DraftField::Rating, "5").unwrap();
        session.on_field_change(DraftField::Price, "3.50").unwrap();
        assert!(session.on_toggle_vibe(Vibe::Chill).unwrap());
        assert!(session.on_toggle_vibe(Vibe::Aesthetic).unwrap());
        session
            .on_field_change(DraftField::Note, "Great atmosphere")
            .unwrap();

        let entry = match session.on_submit().unwrap() {
            SubmitOutcome::Committed(entry) => entry,
            other => panic!("Expected commit, got {:?}", other),
        };

        assert_eq!(session.entries(), &[entry.clone()]);
        assert_eq!(entry.place_type(), PlaceType::CoffeeShop);
        assert_eq!(entry.rating().value(), 5);
        assert_eq!(entry.price(), "3.50");
        assert_eq!(entry.vibes().len(), 2);
        assert_eq!(entry.note(), "Great atmosphere");
        assert_eq!(session.form_state(), FormState::Idle);
        assert_eq!(session.draft(), &Draft::default());
    }

    #[test]
    fn test_incomplete_submit_keeps_form_open() {
        let mut session = ReviewSession::new();
        fill(&mut session, "", "X");

        assert_eq!(
            session.on_submit().unwrap(),
            SubmitOutcome::Incomplete(vec![DraftField::Place])
        );
        assert!(session.entries().is_empty());
        assert_eq!(session.form_state(), FormState::Editing);
        assert_eq!(session.draft().location, "X");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = ReviewSession::new();
        fill(&mut session, "Kofra", "Upper St Giles");

        assert!(session.on_cancel());
        assert_eq!(session.form_state(), FormState::Idle);
        assert_eq!(session.draft(), &Draft::default());
        assert!(session.entries().is_empty());

        assert!(!session.on_cancel());
    }

    #[test]
    fn test_reopen_keeps_current_draft() {
        let mut session = ReviewSession::new();
        fill(&mut session, "Kofra", "");

        assert_eq!(session.open_form().place, "Kofra");
    }

    #[test]
    fn test_open_after_commit_starts_fresh() {
        let mut session = ReviewSession::new();
        fill(&mut session, "Kofra", "Upper St Giles");
        session.on_submit().unwrap();

        assert_eq!(session.open_form(), &Draft::default());
    }

    #[test]
    fn test_delete() {
        let mut session = ReviewSession::new();
        fill(&mut session, "First", "X");
        session.on_submit().unwrap();
        fill(&mut session, "Second", "Y");
        session.on_submit().unwrap();

        let first_id = session.entries()[0].id();
        assert_eq!(session.entry(first_id).unwrap().place(), "First");
        assert!(session.on_delete(first_id));
        assert!(session.entry(first_id).is_none());
        assert!(!session.on_delete(first_id));

        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].place(), "Second");
    }

    #[test]
    fn test_seed_then_add_appends() {
        let mut session = ReviewSession::new();
        session.seed(vec![Draft {
            place: "Seeded".to_string(),
            location: "Somewhere".to_string(),
            ..Draft::default()
        }]);
        fill(&mut session, "Typed", "Elsewhere");
        session.on_submit().unwrap();

        let names: Vec<&str> = session.entries().iter().map(|e| e.place()).collect();
        assert_eq!(names, vec!["Seeded", "Typed"]);
    }
}
