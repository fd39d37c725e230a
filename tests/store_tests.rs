//! Library-level tests for the entry store contract

use brewlog::domain::{
    Draft, DraftField, DraftValidator, EntryId, EntryInput, EntryStore, PlaceType, Rating, Vibe,
    VibeSet,
};
use std::collections::HashSet;

fn input(place: &str, location: &str) -> EntryInput {
    EntryInput {
        place: place.to_string(),
        location: location.to_string(),
        ..EntryInput::default()
    }
}

#[test]
fn test_list_length_tracks_adds() {
    for count in [0usize, 1, 2, 7, 20] {
        let mut store = EntryStore::new();
        let names: Vec<String> = (0..count).map(|i| format!("Place {}", i)).collect();
        for name in &names {
            store.add(input(name, "Norwich"));
        }

        assert_eq!(store.list().len(), count);
        let listed: Vec<&str> = store.list().iter().map(|e| e.place()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(listed, expected);
    }
}

#[test]
fn test_ids_unique_across_lifetime() {
    let mut store = EntryStore::new();
    let mut ever_issued = HashSet::new();

    for i in 0..30 {
        let entry = store.add(input(&format!("P{}", i), "X"));
        assert!(ever_issued.insert(entry.id()));
        if i % 3 == 0 {
            store.remove(entry.id());
        }
    }

    assert_eq!(ever_issued.len(), 30);
    assert_eq!(store.len(), 20);
}

#[test]
fn test_remove_each_position_preserves_order() {
    for victim in 0..5 {
        let mut store = EntryStore::new();
        let ids: Vec<EntryId> = (0..5)
            .map(|i| store.add(input(&format!("P{}", i), "X")).id())
            .collect();

        assert!(store.remove(ids[victim]));

        let remaining: Vec<EntryId> = store.list().iter().map(|e| e.id()).collect();
        let expected: Vec<EntryId> = ids
            .iter()
            .copied()
            .filter(|id| *id != ids[victim])
            .collect();
        assert_eq!(remaining, expected);
    }
}

#[test]
fn test_remove_absent_leaves_list_unchanged() {
    let mut store = EntryStore::new();
    store.add(input("A", "X"));
    store.add(input("B", "Y"));
    let before = store.list().to_vec();

    assert!(!store.remove(EntryId::new(0)));
    assert!(!store.remove(EntryId::new(3)));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_list_snapshot_is_independent() {
    let mut store = EntryStore::new();
    store.add(input("A", "X"));

    let mut copy = store.list().to_vec();
    copy.clear();

    assert_eq!(store.len(), 1);
}

#[test]
fn test_kofra_scenario() {
    let mut store = EntryStore::new();
    let draft = store.draft_mut();
    draft.set_field(DraftField::Place, "Kofra").unwrap();
    draft.set_field(DraftField::Location, "Upper St Giles").unwrap();
    draft.set_field(DraftField::Type, "Coffee shop").unwrap();
    draft.set_field(DraftField::Rating, "5").unwrap();
    draft.set_field(DraftField::Price, "3.50").unwrap();
    draft.vibes.toggle(Vibe::Chill);
    draft.vibes.toggle(Vibe::Aesthetic);
    draft.set_field(DraftField::Note, "Great atmosphere").unwrap();

    assert!(DraftValidator::is_submittable(store.draft()));
    let entry = store.commit_draft().unwrap();

    assert_eq!(store.list().len(), 1);
    let stored = &store.list()[0];
    assert_eq!(stored, &entry);
    assert_eq!(stored.place(), "Kofra");
    assert_eq!(stored.location(), "Upper St Giles");
    assert_eq!(stored.place_type(), PlaceType::CoffeeShop);
    assert_eq!(stored.rating(), Rating::try_from(5).unwrap());
    assert_eq!(stored.price(), "3.50");
    let expected: VibeSet = [Vibe::Chill, Vibe::Aesthetic].into_iter().collect();
    assert_eq!(stored.vibes(), &expected);
    assert_eq!(stored.note(), "Great atmosphere");
}

#[test]
fn test_empty_place_not_submittable() {
    let mut store = EntryStore::new();
    store.draft_mut().location = "X".to_string();

    assert!(!DraftValidator::is_submittable(store.draft()));
    assert!(store.commit_draft().is_none());
    assert!(store.is_empty());
}

#[test]
fn test_submittable_ignores_optional_fields() {
    for rating in 1..=5u8 {
        for vibe in Vibe::ALL {
            let mut draft = Draft {
                place: "P".to_string(),
                location: "L".to_string(),
                rating: Rating::try_from(rating).unwrap(),
                ..Draft::default()
            };
            draft.vibes.toggle(vibe);
            assert!(DraftValidator::is_submittable(&draft));
        }
    }
}
