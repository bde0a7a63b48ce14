use crate::model::TrackerState;

/// A document migration. `apply` returns true when it changed the state.
/// Detection is shape-based, so every migration must be a no-op on a document
/// it has already rewritten.
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub apply: fn(&mut TrackerState) -> bool,
}

/// Ordered by version. Append new migrations at the end.
pub static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "split_legacy_date",
    apply: split_legacy_date,
}];

/// Run every migration in order. Returns the names of the ones that changed
/// something; an empty result means the document does not need rewriting.
pub fn run(state: &mut TrackerState) -> Vec<&'static str> {
    run_with(MIGRATIONS, state)
}

fn run_with(migrations: &[Migration], state: &mut TrackerState) -> Vec<&'static str> {
    let mut applied = Vec::new();
    for m in migrations {
        if (m.apply)(state) {
            log::info!("applied migration v{} ({})", m.version, m.name);
            applied.push(m.name);
        }
    }
    applied
}

/// v1: single `date` per entry becomes a one-day `start_date`/`end_date` range.
fn split_legacy_date(state: &mut TrackerState) -> bool {
    let mut changed = false;
    for entry in &mut state.entries {
        if entry.start_date.is_none()
            && let Some(date) = entry.date.take()
        {
            entry.start_date = Some(date);
            entry.end_date = Some(date);
            changed = true;
        }
    }
    changed
}
