use crate::model::{Entry, TrackerState};
use chrono::{Days, NaiveDate};

/// Where the cycle length used for a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleSource {
    /// Mean interval between logged start dates.
    Average,
    /// The user-configured default (fewer than two dated entries).
    Configured,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub last_date: NaiveDate,
    pub next_date: NaiveDate,
    pub cycle_length: i64,
    pub source: CycleSource,
}

/// Entry with the latest representative date. Ties keep the first one in
/// storage order; entries with no usable date are skipped.
pub fn latest(entries: &[Entry]) -> Option<(&Entry, NaiveDate)> {
    let mut best: Option<(&Entry, NaiveDate)> = None;
    for entry in entries {
        let Some(date) = entry.representative_date() else {
            continue;
        };
        match best {
            Some((_, best_date)) if date <= best_date => {}
            _ => best = Some((entry, date)),
        }
    }
    best
}

/// Mean number of days between consecutive start dates, rounded to the
/// nearest day with halves rounded up. `None` with fewer than two dates.
pub fn average_cycle(entries: &[Entry]) -> Option<i64> {
    let mut dates: Vec<NaiveDate> = entries
        .iter()
        .filter_map(Entry::representative_date)
        .collect();
    if dates.len() < 2 {
        return None;
    }
    dates.sort();

    let total: i64 = dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .sum();
    let n = (dates.len() - 1) as i64;
    // Sorted, so total >= 0 and integer division floors
    Some((2 * total + n) / (2 * n))
}

/// Next expected start date, or `None` when nothing dated has been logged.
/// A zero-day average (every entry on one day) falls back to the configured
/// length, same as a missing average.
pub fn predict(state: &TrackerState) -> Option<Prediction> {
    let (_, last_date) = latest(&state.entries)?;
    let (cycle_length, source) = match average_cycle(&state.entries) {
        Some(avg) if avg > 0 => (avg, CycleSource::Average),
        _ => (i64::from(state.cycle_length), CycleSource::Configured),
    };
    let next_date = last_date.checked_add_days(Days::new(cycle_length as u64))?;
    Some(Prediction {
        last_date,
        next_date,
        cycle_length,
        source,
    })
}
