use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::score::ScoreReport;

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedRun {
    pub duration_ms: u64,
    pub report: ScoreReport,
}

fn state_path() -> PathBuf {
    let dir = dirs_or_cwd();
    dir.join(".metamorph-state.json")
}

fn dirs_or_cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn save_last_run(run: &SavedRun) {
    if let Ok(json) = serde_json::to_string(run) {
        let _ = std::fs::write(state_path(), json);
    }
}

pub fn load_last_run() -> Option<SavedRun> {
    let path = state_path();
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_to_path(run: &SavedRun, path: &std::path::Path) -> std::io::Result<()> {
    let json = serde_json::to_string(run)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

pub fn load_from_path(path: &std::path::Path) -> Option<SavedRun> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
