//! Persisted login session.
//!
//! The signed-in account is kept as a small JSON file in the data
//! directory so it survives across invocations, mirroring how the
//! database file itself is located.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub full_name: String,
    pub role: String,
}

/// Path: ~/.local/share/nhu-cli/session.json (per-platform data dir).
pub fn session_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local/share");
        home
    });
    base.join("nhu-cli").join("session.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Persist the session to disk.
pub fn save_session(session: &Session) -> std::io::Result<()> {
    save_session_at(&session_path(), session)
}

/// Load the current session, if one exists and parses.
pub fn load_session() -> Option<Session> {
    load_session_at(&session_path())
}

/// Remove the current session. Missing file is not an error.
pub fn clear_session() -> std::io::Result<()> {
    clear_session_at(&session_path())
}

pub(crate) fn save_session_at(path: &Path, session: &Session) -> std::io::Result<()> {
    let contents = serde_json::to_string_pretty(session)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    write_string(path, &contents)
}

pub(crate) fn load_session_at(path: &Path) -> Option<Session> {
    let contents = try_read_to_string(path)?;
    serde_json::from_str(&contents).ok()
}

pub(crate) fn clear_session_at(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
