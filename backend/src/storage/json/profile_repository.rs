use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::ChildProfile;
use crate::storage::traits::ProfileStorage;

const RECORD_SET: &str = "profile";

/// JSON-document-backed profile repository.
#[derive(Clone)]
pub struct ProfileRepository {
    connection: JsonConnection,
}

impl ProfileRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ProfileStorage for ProfileRepository {
    async fn get_profile(&self) -> Result<Option<ChildProfile>> {
        let Some(text) = self.connection.read_document(RECORD_SET) else {
            return Ok(None);
        };

        match serde_json::from_str(&text) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!("Stored profile failed to decode, treating as unset: {}", e);
                Ok(None)
            }
        }
    }

    async fn set_profile(&self, profile: &ChildProfile) -> Result<()> {
        let text = serde_json::to_string_pretty(profile)?;
        self.connection.write_document(RECORD_SET, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shared::Sex;
    use tempfile::TempDir;

    fn test_profile() -> ChildProfile {
        ChildProfile {
            id: "profile::1702516122000".to_string(),
            name: "An".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            sex: Sex::Male,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        assert!(repo.get_profile().await.unwrap().is_none());

        let profile = test_profile();
        repo.set_profile(&profile).await.unwrap();

        let loaded = repo.get_profile().await.unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_replaces_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        repo.set_profile(&test_profile()).await.unwrap();

        let mut replacement = test_profile();
        replacement.id = "profile::1702516999000".to_string();
        replacement.name = "Mai".to_string();
        replacement.sex = Sex::Female;
        repo.set_profile(&replacement).await.unwrap();

        let loaded = repo.get_profile().await.unwrap().unwrap();
        assert_eq!(loaded.name, "Mai");
        assert_eq!(loaded.sex, Sex::Female);
    }

    #[tokio::test]
    async fn test_corrupt_document_loads_as_unset() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        connection.write_document("profile", "{not json").unwrap();

        let repo = ProfileRepository::new(connection);
        assert!(repo.get_profile().await.unwrap().is_none());
    }
}
