//! Output formatting utilities

use crate::domain::{Draft, DraftField, Entry};

const EMPTY_LIST: &str = "No coffee shops logged yet\nRun 'add' to log your first place";

pub const HELP: &str = "\
Commands:
  add                      Start a new entry
  set <field> <value>      Set place, location, type, rating, price or note
  vibe <tag>               Toggle Chill, Quiet, Social, Aesthetic, Cozy or Writing
  save                     Save the entry (place and location are required)
  cancel                   Discard the entry in progress
  delete <id>              Delete an entry
  show <id>                Show one entry
  list                     Show all entries
  draft                    Show the entry in progress
  help                     Show this help
  quit                     End the session";

/// Format one entry as a card
pub fn format_entry_card(entry: &Entry, currency: &str) -> String {
    let mut card = format!(
        "{}  {}\n  📍 {}    ⭐ {}\n  {}\n",
        entry.id(),
        entry.place(),
        entry.location(),
        entry.rating(),
        entry.place_type()
    );

    if !entry.vibes().is_empty() {
        card.push_str(&format!("  Vibes: {}\n", entry.vibes()));
    }
    if !entry.note().is_empty() {
        card.push_str(&format!("  \"{}\"\n", entry.note()));
    }

    let logged = entry.logged_at().format("%d-%m-%Y");
    if entry.price().is_empty() {
        card.push_str(&format!("  logged {}\n", logged));
    } else {
        card.push_str(&format!(
            "  {}{}  ·  logged {}\n",
            currency,
            entry.price(),
            logged
        ));
    }

    card
}

/// Format all entries as cards separated by blank lines
pub fn format_entry_list(entries: &[Entry], currency: &str) -> String {
    if entries.is_empty() {
        return EMPTY_LIST.to_string();
    }

    entries
        .iter()
        .map(|entry| format_entry_card(entry, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the form's current values
pub fn format_draft(draft: &Draft, currency: &str) -> String {
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };
    let vibes = if draft.vibes.is_empty() {
        "-".to_string()
    } else {
        draft.vibes.to_string()
    };
    let price = if draft.price.is_empty() {
        "-".to_string()
    } else {
        format!("{}{}", currency, draft.price)
    };

    format!(
        "place:    {}\nlocation: {}\ntype:     {}\nrating:   {}\nprice:    {}\nvibes:    {}\nnote:     {}\n",
        or_dash(&draft.place),
        or_dash(&draft.location),
        draft.place_type,
        draft.rating,
        price,
        vibes,
        or_dash(&draft.note)
    )
}

pub fn format_missing_fields(missing: &[DraftField]) -> String {
    let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
    format!("Missing required field(s): {}", names.join(", "))
}
