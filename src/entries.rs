use crate::model::{Entry, TrackerState};
use crate::store::Store;
use crate::BloomError;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

pub const CYCLE_LENGTH_RANGE: RangeInclusive<u32> = 20..=40;

/// Append an entry and persist. `end < start` is accepted as-is.
pub fn add_entry(
    store: &Store,
    state: &mut TrackerState,
    start_date: NaiveDate,
    end_date: NaiveDate,
    symptoms: &str,
) -> Result<(), BloomError> {
    if end_date < start_date {
        log::warn!("entry ends ({end_date}) before it starts ({start_date})");
    }
    state.entries.push(Entry::new(start_date, end_date, symptoms));
    store.save(state)
}

/// Storage index for a position in the most-recent-first listing.
pub fn storage_index(len: usize, display_position: usize) -> Option<usize> {
    if display_position >= len {
        return None;
    }
    Some(len - 1 - display_position)
}

/// Remove the entry at `index` (storage order) and persist.
pub fn delete_entry(
    store: &Store,
    state: &mut TrackerState,
    index: usize,
) -> Result<Entry, BloomError> {
    if index >= state.entries.len() {
        return Err(BloomError::NotFound(format!(
            "entry {index} (have {})",
            state.entries.len()
        )));
    }
    let removed = state.entries.remove(index);
    store.save(state)?;
    Ok(removed)
}

/// Overwrite the default cycle length and persist.
pub fn update_cycle_length(
    store: &Store,
    state: &mut TrackerState,
    days: u32,
) -> Result<(), BloomError> {
    if !CYCLE_LENGTH_RANGE.contains(&days) {
        return Err(BloomError::Validation(format!(
            "cycle length {days} outside {}-{} days",
            CYCLE_LENGTH_RANGE.start(),
            CYCLE_LENGTH_RANGE.end()
        )));
    }
    state.cycle_length = days;
    store.save(state)
}
