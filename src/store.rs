use crate::migrate;
use crate::model::TrackerState;
use crate::BloomError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSON file holding the whole tracker document.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, or the empty default if there is no file yet.
    /// Missing top-level keys are filled in; migrations are not applied.
    pub fn load(&self) -> Result<TrackerState, BloomError> {
        if !self.path.exists() {
            log::debug!("no data file at {}, starting empty", self.path.display());
            return Ok(TrackerState::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let state: TrackerState = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Overwrite the document with `state`.
    pub fn save(&self, state: &TrackerState) -> Result<(), BloomError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, to_pretty_json(state)?)?;
        log::debug!(
            "saved {} entries to {}",
            state.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load, migrate, and write back if any migration changed the document.
    pub fn open(&self) -> Result<TrackerState, BloomError> {
        let mut state = self.load()?;
        let applied = migrate::run(&mut state);
        if !applied.is_empty() {
            self.save(&state)?;
            eprintln!(
                "bloom: upgraded {} ({})",
                self.path.display(),
                applied.join(", ")
            );
        }
        Ok(state)
    }
}

fn to_pretty_json(state: &TrackerState) -> Result<Vec<u8>, BloomError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    state.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("period_data.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_default() {
        let (_dir, store) = test_store();
        let state = store.load().unwrap();
        assert_eq!(state, TrackerState::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("nested").join("data.json"));
        store.save(&TrackerState::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn backfills_missing_keys() {
        let (_dir, store) = test_store();
        std::fs::write(store.path(), r#"{"entries": []}"#).unwrap();
        assert_eq!(store.load().unwrap().cycle_length, 28);

        std::fs::write(store.path(), r#"{"cycle_length": 33}"#).unwrap();
        let state = store.load().unwrap();
        assert!(state.entries.is_empty());
        assert_eq!(state.cycle_length, 33);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let (_dir, store) = test_store();
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(BloomError::Json(_))));
    }

    #[test]
    fn save_load_round_trip_preserves_structure() {
        let (_dir, store) = test_store();
        let original = r#"{
    "entries": [
        {
            "start_date": "2024-01-01",
            "end_date": "2024-01-05",
            "symptoms": "cramps"
        }
    ],
    "cycle_length": 30
}"#;
        std::fs::write(store.path(), original).unwrap();
        let state = store.load().unwrap();
        store.save(&state).unwrap();

        let before: serde_json::Value = serde_json::from_str(original).unwrap();
        let after: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(before, after);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), original);
    }

    #[test]
    fn save_keeps_unknown_keys() {
        let (_dir, store) = test_store();
        let original = serde_json::json!({
            "entries": [{
                "start_date": "2024-01-01",
                "end_date": "2024-01-05",
                "symptoms": "x",
                "flow": "heavy",
            }],
            "cycle_length": 28,
            "theme": "pink",
        });
        std::fs::write(store.path(), original.to_string()).unwrap();

        let state = store.load().unwrap();
        store.save(&state).unwrap();

        let after: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(after, original);
    }

    #[test]
    fn migration_write_back_keeps_unknown_keys() {
        let (_dir, store) = test_store();
        std::fs::write(
            store.path(),
            r#"{"entries": [{"date": "2024-03-01", "symptoms": "cramps", "flow": "light"}], "theme": "pink"}"#,
        )
        .unwrap();

        store.open().unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk["theme"], "pink");
        assert_eq!(on_disk["entries"][0]["flow"], "light");
        assert_eq!(on_disk["entries"][0]["start_date"], "2024-03-01");
        assert!(on_disk["entries"][0].get("date").is_none());
    }

    #[test]
    fn open_migrates_and_rewrites_legacy_document() {
        let (_dir, store) = test_store();
        std::fs::write(
            store.path(),
            r#"{"entries": [{"date": "2024-03-01", "symptoms": "cramps"}], "cycle_length": 28}"#,
        )
        .unwrap();

        let state = store.open().unwrap();
        assert_eq!(
            state.entries,
            vec![Entry::new(d("2024-03-01"), d("2024-03-01"), "cramps")]
        );

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            on_disk["entries"][0],
            serde_json::json!({
                "start_date": "2024-03-01",
                "end_date": "2024-03-01",
                "symptoms": "cramps",
            })
        );
    }

    #[test]
    fn open_does_not_write_modern_document() {
        let (_dir, store) = test_store();
        let original = r#"{"entries":[{"start_date":"2024-01-01","end_date":"2024-01-02","symptoms":""}],"cycle_length":28}"#;
        std::fs::write(store.path(), original).unwrap();
        store.open().unwrap();
        // Compact input stays compact: nothing was rewritten
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), original);
    }

    #[test]
    fn open_without_file_does_not_create_one() {
        let (_dir, store) = test_store();
        store.open().unwrap();
        assert!(!store.path().exists());
    }
}
