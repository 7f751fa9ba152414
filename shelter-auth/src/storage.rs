use crate::models::UserProfile;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "shelter_token";
/// Storage key for the signed-in user's profile
pub const PROFILE_KEY: &str = "shelter_user";

/// Persists the session under two fixed keys in a local directory.
///
/// Each key maps to one JSON file. Both files are written on login and
/// removed on logout; a missing or unreadable file counts as "no session".
pub struct SessionStorage {
    dir: PathBuf,
}

impl SessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Write token and profile to their keys.
    pub fn save(&self, token: &str, user: &UserProfile) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let token_json = serde_json::to_string(token)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.key_path(TOKEN_KEY), token_json)?;

        let profile_json = serde_json::to_string(user)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.key_path(PROFILE_KEY), profile_json)?;

        Ok(())
    }

    /// Load a persisted session, if both keys are present and valid.
    pub fn load(&self) -> Option<(String, UserProfile)> {
        let token: String = read_json(&self.key_path(TOKEN_KEY))?;
        let user: UserProfile = read_json(&self.key_path(PROFILE_KEY))?;
        Some((token, user))
    }

    /// Remove both keys. Missing files are not an error.
    pub fn clear(&self) -> io::Result<()> {
        for key in [TOKEN_KEY, PROFILE_KEY] {
            match fs::remove_file(self.key_path(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable session file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage(name: &str) -> SessionStorage {
        let dir = std::env::temp_dir().join(format!(
            "shelter-auth-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        SessionStorage::new(dir)
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: 3,
            name: "Bruno".to_string(),
            email: "bruno@example.org".to_string(),
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let storage = temp_storage("round-trip");
        storage.save("token-abc", &profile()).unwrap();

        let (token, user) = storage.load().unwrap();
        assert_eq!(token, "token-abc");
        assert_eq!(user, profile());
    }

    #[test]
    fn test_load_without_saved_session() {
        let storage = temp_storage("empty");
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = temp_storage("clear");
        storage.save("token-abc", &profile()).unwrap();
        storage.clear().unwrap();
        assert!(storage.load().is_none());
        // Clearing again must not fail
        storage.clear().unwrap();
    }

    #[test]
    fn test_corrupt_token_counts_as_no_session() {
        let storage = temp_storage("corrupt");
        storage.save("token-abc", &profile()).unwrap();
        fs::write(storage.key_path(TOKEN_KEY), "not json{").unwrap();
        assert!(storage.load().is_none());
    }
}
