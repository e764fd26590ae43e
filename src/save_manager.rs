use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::combat::StageRecord;
use crate::core::constants::SAVE_TIMESTAMP_FORMAT;

/// Stores finished sessions as pretty-printed JSON, one file per session,
/// named after the UTC time the session was saved.
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Uses `save_dir` as-is. The directory is created on the first save.
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    /// Saves a session stamped with the current time. Returns the filename.
    pub fn save_session(&self, records: &[StageRecord]) -> io::Result<String> {
        self.save_session_at(records, Utc::now())
    }

    /// Saves a session as `YYYYMMDDTHHMMSS.json`. Never overwrites: if the
    /// name is taken, `-1`, `-2`, ... is appended to the stem.
    pub fn save_session_at(
        &self,
        records: &[StageRecord],
        timestamp: DateTime<Utc>,
    ) -> io::Result<String> {
        fs::create_dir_all(&self.save_dir)?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let stem = timestamp.format(SAVE_TIMESTAMP_FORMAT).to_string();
        let mut attempt = 0u32;
        loop {
            let filename = if attempt == 0 {
                format!("{}.json", stem)
            } else {
                format!("{}-{}.json", stem, attempt)
            };

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.save_dir.join(&filename))
            {
                Ok(mut file) => {
                    file.write_all(json.as_bytes())?;
                    log::info!("saved {} stages to {}", records.len(), filename);
                    return Ok(filename);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e),
            }
        }
    }

    /// Lists saved sessions, oldest first. A missing directory lists as empty.
    pub fn list_replays(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.save_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut filenames = Vec::new();
        for entry in entries {
            let path = entry?.path();

            // Only process .json files
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                filenames.push(name.to_string());
            }
        }

        filenames.sort();
        Ok(filenames)
    }

    /// Loads a saved session by its exact filename.
    pub fn load_replay(&self, filename: &str) -> io::Result<Vec<StageRecord>> {
        let json = fs::read_to_string(self.save_dir.join(filename))?;
        let records: Vec<StageRecord> = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        log::info!("loaded {} stages from {}", records.len(), filename);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{PlayerTurn, TurnLogEntry};
    use crate::entity::{Monster, Player};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample_records() -> Vec<StageRecord> {
        vec![StageRecord {
            player: Player::new(30, 10, 0.42, 4),
            monster: Monster::new(45, 13),
            logs: vec![TurnLogEntry::Player(PlayerTurn::Escape {
                msg: "Escaped successfully!".to_string(),
                succeed: true,
            })],
            win: Some(true),
        }]
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_filename_from_timestamp() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        let name = manager.save_session_at(&sample_records(), fixed_time()).unwrap();
        assert_eq!(name, "20240309T140507.json");
    }

    #[test]
    fn test_same_second_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        let first = manager.save_session_at(&sample_records(), fixed_time()).unwrap();
        let second = manager.save_session_at(&[], fixed_time()).unwrap();
        assert_eq!(first, "20240309T140507.json");
        assert_eq!(second, "20240309T140507-1.json");
        assert_eq!(manager.load_replay(&first).unwrap(), sample_records());
        assert!(manager.load_replay(&second).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_lists_empty() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path().join("never-created"));
        assert!(manager.list_replays().unwrap().is_empty());
    }

    #[test]
    fn test_list_is_sorted_and_json_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("20240102T000000.json"), "[]").unwrap();
        fs::write(dir.path().join("20240101T000000.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        let manager = SaveManager::new(dir.path());
        assert_eq!(
            manager.list_replays().unwrap(),
            vec!["20240101T000000.json", "20240102T000000.json"]
        );
    }

    #[test]
    fn test_malformed_file_is_invalid_data() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let manager = SaveManager::new(dir.path());
        let err = manager.load_replay("broken.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        let err = manager.load_replay("nope.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
