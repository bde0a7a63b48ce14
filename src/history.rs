use crate::entries::{delete_entry, storage_index};
use crate::model::{Entry, TrackerState};
use crate::store::Store;
use crate::BloomError;
use chrono::NaiveDate;

pub const NO_ENTRIES: &str = "No entries found.";

pub fn handle_history(store: &Store) -> Result<(), BloomError> {
    let state = store.open()?;
    print!("{}", render_history(&state));
    Ok(())
}

/// Delete by the 1-based position printed by `history`.
pub fn handle_delete(store: &Store, position: usize) -> Result<(), BloomError> {
    let mut state = store.open()?;
    let index = position
        .checked_sub(1)
        .and_then(|p| storage_index(state.entries.len(), p))
        .ok_or_else(|| {
            BloomError::NotFound(format!(
                "no entry at position {position} (have {})",
                state.entries.len()
            ))
        })?;
    let removed = delete_entry(store, &mut state, index)?;
    eprintln!("bloom: deleted entry {}", date_range(&removed));
    Ok(())
}

/// Entries newest-first, numbered from 1.
pub fn render_history(state: &TrackerState) -> String {
    if state.entries.is_empty() {
        return format!("{NO_ENTRIES}\n");
    }
    let mut out = String::new();
    for (i, entry) in state.entries.iter().rev().enumerate() {
        let symptoms = if entry.symptoms.is_empty() {
            "None"
        } else {
            entry.symptoms.as_str()
        };
        out.push_str(&format!("[{}] {}\n", i + 1, date_range(entry)));
        out.push_str(&format!("    Symptoms: {symptoms}\n"));
    }
    out
}

fn date_range(entry: &Entry) -> String {
    let fmt = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "?".into());
    format!(
        "{} -> {}",
        fmt(entry.start_date.or(entry.date)),
        fmt(entry.end_date.or(entry.date))
    )
}
