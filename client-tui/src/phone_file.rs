use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The one piece of client state that survives a restart: the phone number
/// of the signed-in user, used to attempt a silent session resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct StoredIdentity {
    phone_number: String,
}

fn phone_file_path_in(dir: &Path) -> PathBuf {
    dir.join("phone_number.json")
}

/// Persist the signed-in phone number.
pub fn save_phone_number(dir: &Path, phone_number: &str) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir).map_err(|e| format!("Failed to create directory: {}", e))?;

    let path = phone_file_path_in(dir);
    let identity = StoredIdentity {
        phone_number: phone_number.to_string(),
    };
    let json = serde_json::to_string_pretty(&identity)
        .map_err(|e| format!("Failed to serialize identity: {}", e))?;

    std::fs::write(&path, json).map_err(|e| format!("Failed to write phone file: {}", e))?;

    Ok(path)
}

/// Load the persisted phone number, if one exists.
pub fn load_phone_number(dir: &Path) -> Result<Option<String>, String> {
    let path = phone_file_path_in(dir);
    if !path.exists() {
        return Ok(None);
    }

    let contents =
        std::fs::read_to_string(&path).map_err(|e| format!("Failed to read phone file: {}", e))?;

    let identity: StoredIdentity = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse phone file: {}", e))?;

    Ok(Some(identity.phone_number))
}

/// Delete the persisted phone number.
pub fn clear_phone_number(dir: &Path) -> Result<(), String> {
    let path = phone_file_path_in(dir);
    if path.exists() {
        std::fs::remove_file(&path).map_err(|e| format!("Failed to remove phone file: {}", e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let path = save_phone_number(dir.path(), "11988887777").unwrap();
        assert!(path.exists());

        let loaded = load_phone_number(dir.path()).unwrap();
        assert_eq!(loaded.as_deref(), Some("11988887777"));
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_phone_number(dir.path()).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();

        save_phone_number(dir.path(), "11988887777").unwrap();
        clear_phone_number(dir.path()).unwrap();

        let loaded = load_phone_number(dir.path()).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_clear_on_empty_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(clear_phone_number(dir.path()).is_ok());
    }

    #[test]
    fn test_save_overwrites_previous_number() {
        let dir = tempfile::tempdir().unwrap();

        save_phone_number(dir.path(), "1198888777").unwrap();
        save_phone_number(dir.path(), "21977776666").unwrap();

        let loaded = load_phone_number(dir.path()).unwrap();
        assert_eq!(loaded.as_deref(), Some("21977776666"));
    }
}
