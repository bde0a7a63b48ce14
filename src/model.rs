use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// One logged cycle.
///
/// `date` only appears in documents written by older versions, which stored a
/// single day per entry. The migration step rewrites it into the
/// `start_date`/`end_date` pair, so after `Store::open` it is always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symptoms: String,
    /// Keys this version doesn't know about, written back untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, symptoms: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            date: None,
            symptoms: symptoms.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Date used to order entries: `start_date`, falling back to the legacy `date`.
    pub fn representative_date(&self) -> Option<NaiveDate> {
        self.start_date.or(self.date)
    }
}

/// The whole persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            cycle_length: DEFAULT_CYCLE_LENGTH,
            extra: serde_json::Map::new(),
        }
    }
}

fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_LENGTH
}

/// Older documents may carry `"symptoms": null`; treat it as nothing logged.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
