//! Session snapshot persistence: one JSON file per shift.
//!
//! The on-disk form is the ledger snapshot with camelCase keys, plus an
//! optional identifier and save timestamp. Loading re-establishes the
//! one-row-per-table minimum so a hand-edited file with empty tables is
//! still usable.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use caisse_engine::RowSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    #[serde(flatten)]
    pub rows: RowSet,
}

#[derive(Debug)]
pub enum SessionError {
    Read(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
    Write(PathBuf, io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, err) => write!(f, "cannot read {}: {}", path.display(), err),
            Self::Parse(path, err) => write!(f, "invalid session in {}: {}", path.display(), err),
            Self::Write(path, err) => write!(f, "cannot write {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for SessionError {}

impl Session {
    pub fn new() -> Self {
        Self { id: None, saved_at: None, rows: RowSet::new() }
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = fs::read_to_string(path)
            .map_err(|e| SessionError::Read(path.to_path_buf(), e))?;
        let mut session: Session = serde_json::from_str(&text)
            .map_err(|e| SessionError::Parse(path.to_path_buf(), e))?;
        session.rows.ensure_min_rows();
        Ok(session)
    }

    /// Save with a fresh `savedAt` stamp.
    pub fn save(&mut self, path: &Path) -> Result<(), SessionError> {
        self.saved_at = Some(Utc::now().to_rfc3339());
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SessionError::Parse(path.to_path_buf(), e))?;
        fs::write(path, json).map_err(|e| SessionError::Write(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_keeps_rows_and_stamps_saved_at() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shift.json");

        let mut session = Session::new();
        session.rows.solde_de_debut = "100".into();
        session.rows.site = "Tunis".into();
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.rows.solde_de_debut, "100");
        assert_eq!(loaded.rows.site, "Tunis");
        assert!(loaded.saved_at.is_some());
    }

    #[test]
    fn snapshot_keys_are_camel_case() {
        let mut session = Session::new();
        session.rows.solde_de_debut = "100".into();
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains(r#""soldeDeDebut":"100""#));
        assert!(json.contains(r#""creditRows""#));
        // Unset id/savedAt stay out of the file.
        assert!(!json.contains(r#""id""#));
    }

    #[test]
    fn load_reseeds_empty_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bare.json");
        fs::write(&path, r#"{"soldeDeDebut":"50"}"#).unwrap();

        let session = Session::load(&path).unwrap();
        assert_eq!(session.rows.solde_de_debut, "50");
        assert_eq!(session.rows.credit_rows.len(), 1);
        assert_eq!(session.rows.retrait_rows.len(), 1);
        // Unstated multiplier takes its default.
        assert_eq!(session.rows.multiplier, "1.1");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = Session::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SessionError::Read(..)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = Session::load(&path).unwrap_err();
        assert!(matches!(err, SessionError::Parse(..)));
    }
}
