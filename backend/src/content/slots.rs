use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Slot holding the serialized content document.
pub const WEBSITE_CONTENT: &str = "websiteContent";
/// Slot holding the serialized admin credential pair.
pub const ADMIN_CREDENTIALS: &str = "adminCredentials";
/// Marker slot present (value `"true"`) while an admin session is open.
pub const ADMIN_AUTH: &str = "adminAuth";
/// Slot holding the active locale code.
pub const LANGUAGE: &str = "language";

/// Named durable key-value slots, backed by a single sqlite table. Each
/// operation opens its own connection; writes are whole-value replacements.
#[derive(Clone)]
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, String> {
        let store = SlotStore {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS slots (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )
        .map_err(|e| e.to_string())?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, String> {
        Connection::open(&self.path).map_err(|e| e.to_string())
    }

    pub fn read(&self, key: &str) -> Result<Option<String>, String> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT value FROM slots WHERE key = ?1")
            .map_err(|e| e.to_string())?;
        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .map_err(|e| e.to_string())?;
        match rows.next() {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(e)) => Err(e.to_string()),
            None => Ok(None),
        }
    }

    pub fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT OR REPLACE INTO slots (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), String> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM slots WHERE key = ?1", params![key])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SlotStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        (dir, store)
    }

    #[test]
    fn write_read_replace_remove() {
        let (_dir, store) = temp_store();
        assert_eq!(store.read("missing").unwrap(), None);

        store.write("language", "he").unwrap();
        assert_eq!(store.read("language").unwrap().as_deref(), Some("he"));

        store.write("language", "en").unwrap();
        assert_eq!(store.read("language").unwrap().as_deref(), Some("en"));

        store.remove("language").unwrap();
        assert_eq!(store.read("language").unwrap(), None);
    }

    #[test]
    fn slots_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.sqlite");
        SlotStore::open(&path)
            .unwrap()
            .write(WEBSITE_CONTENT, "{}")
            .unwrap();
        let reopened = SlotStore::open(&path).unwrap();
        assert_eq!(
            reopened.read(WEBSITE_CONTENT).unwrap().as_deref(),
            Some("{}")
        );
    }
}
