use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Best-score file, written next to the working directory.
pub const SAVE_FILE: &str = "snake_highscore.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveData {
    #[serde(rename = "snakeHighScore", default)]
    high_score: u32,
}

/// Read the stored best score. A missing or unreadable file is an empty
/// record, never an error.
pub fn load_high_score(path: &Path) -> u32 {
    let Ok(text) = fs::read_to_string(path) else {
        return 0;
    };
    serde_json::from_str::<SaveData>(&text)
        .map(|data| data.high_score)
        .unwrap_or_default()
}

/// Persist a freshly beaten best score. Write failures are dropped; the
/// final score is already on screen either way.
pub fn store_high_score(path: &Path, high_score: u32) {
    let data = SaveData { high_score };
    if let Ok(text) = serde_json::to_string_pretty(&data) {
        let _ = fs::write(path, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        env::temp_dir().join(format!("snake_classic_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_reads_as_zero() {
        assert_eq!(load_high_score(Path::new("no/such/file.json")), 0);
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let path = scratch("corrupt");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(load_high_score(&path), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn round_trips_the_best_score() {
        let path = scratch("roundtrip");
        store_high_score(&path, 42);
        assert_eq!(load_high_score(&path), 42);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_keeps_the_expected_key() {
        let path = scratch("key");
        store_high_score(&path, 7);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"snakeHighScore\""));
        let _ = fs::remove_file(&path);
    }
}
