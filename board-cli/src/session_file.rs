use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use board_client::Session;

const SESSION_FILE: &str = ".board_session";

/// Путь к файлу сессии: `BOARD_SESSION_FILE` или `.board_session` в текущей папке.
pub(crate) fn session_path() -> PathBuf {
    std::env::var_os("BOARD_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SESSION_FILE))
}

fn parse_session(raw: &str) -> Option<Session> {
    let session = serde_json::from_str::<Session>(raw.trim()).ok()?;
    if session.token.trim().is_empty() {
        return None;
    }
    Some(session)
}

pub(crate) fn load(path: &Path) -> io::Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)?;
    Ok(parse_session(&raw))
}

pub(crate) fn save(path: &Path, session: &Session) -> io::Result<()> {
    let raw = serde_json::to_string_pretty(session).map_err(io::Error::other)?;
    fs::write(path, raw)
}

pub(crate) fn clear(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
