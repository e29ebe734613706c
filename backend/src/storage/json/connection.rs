use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// JsonConnection manages the data directory and the JSON document that
/// backs each record set.
///
/// Each record set name maps to one document (`profile.json`,
/// `growth_records.json`, `meal_records.json`). Loads treat a missing or
/// unreadable document as "unset"; saves go through a temp file and rename
/// so a crash never leaves a half-written document behind.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at the given directory, creating it if
    /// needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory
    /// (~/Documents/Growth Tracker), honoring `GROWTH_TRACKER_DATA_DIR` as
    /// an override.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("GROWTH_TRACKER_DATA_DIR") {
            info!("Using data directory from environment: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Growth Tracker");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the document backing a record set.
    pub fn document_path(&self, record_set: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", record_set))
    }

    /// Read the raw text of a record set document. Absent documents read as
    /// `None`; an unreadable document is logged and also reads as `None`
    /// rather than failing the load.
    pub fn read_document(&self, record_set: &str) -> Option<String> {
        let path = self.document_path(record_set);
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    "Failed to read {} document, treating as unset: {}",
                    record_set, e
                );
                None
            }
        }
    }

    /// Atomically replace a record set document with the given text.
    pub fn write_document(&self, record_set: &str, text: &str) -> Result<()> {
        let path = self.document_path(record_set);

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, text)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let connection = JsonConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_absent_document_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        assert!(connection.read_document("profile").is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        connection.write_document("profile", "{\"hello\":1}").unwrap();
        assert_eq!(
            connection.read_document("profile").unwrap(),
            "{\"hello\":1}"
        );

        // No temp file left behind
        assert!(!connection.document_path("profile").with_extension("tmp").exists());
    }
}
