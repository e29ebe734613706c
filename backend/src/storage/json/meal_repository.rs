use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::MealRecord;
use crate::storage::traits::MealRecordStorage;

const RECORD_SET: &str = "meal_records";

/// JSON-document-backed meal record repository.
#[derive(Clone)]
pub struct MealRepository {
    connection: JsonConnection,
}

impl MealRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load(&self) -> Vec<MealRecord> {
        let Some(text) = self.connection.read_document(RECORD_SET) else {
            return Vec::new();
        };

        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Stored meal records failed to decode, starting empty: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[MealRecord]) -> Result<()> {
        let text = serde_json::to_string_pretty(records)?;
        self.connection.write_document(RECORD_SET, &text)
    }
}

#[async_trait]
impl MealRecordStorage for MealRepository {
    async fn list_meal_records(&self) -> Result<Vec<MealRecord>> {
        Ok(self.load())
    }

    async fn append_meal_record(&self, record: &MealRecord) -> Result<()> {
        let mut records = self.load();
        records.push(record.clone());
        self.save(&records)
    }

    async fn remove_meal_record(&self, record_id: &str) -> Result<bool> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| r.id != record_id);

        if records.len() == before {
            return Ok(false);
        }

        self.save(&records)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::MealType;
    use tempfile::TempDir;

    fn record(id: &str, meal_type: MealType, description: &str) -> MealRecord {
        MealRecord {
            id: id.to_string(),
            date: Utc::now(),
            meal_type,
            description: description.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_append_and_remove_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = MealRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        repo.append_meal_record(&record("meal::1", MealType::Breakfast, "rice porridge"))
            .await
            .unwrap();
        repo.append_meal_record(&record("meal::2", MealType::Lunch, "chicken soup"))
            .await
            .unwrap();

        let removed = repo.remove_meal_record("meal::1").await.unwrap();
        assert!(removed);

        let meals = repo.list_meal_records().await.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, "meal::2");
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let repo = MealRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        repo.append_meal_record(&record("meal::1", MealType::Snack, "banana"))
            .await
            .unwrap();

        let removed = repo.remove_meal_record("meal::999").await.unwrap();
        assert!(!removed);

        let meals = repo.list_meal_records().await.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].description, "banana");
    }

    #[tokio::test]
    async fn test_unrecognized_meal_type_in_document_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        connection
            .write_document(
                "meal_records",
                r#"[{"id":"meal::1","date":"2024-01-01T08:00:00Z","meal_type":"Elevenses","description":"toast","image_url":null}]"#,
            )
            .unwrap();

        let repo = MealRepository::new(connection);
        assert!(repo.list_meal_records().await.unwrap().is_empty());
    }
}
