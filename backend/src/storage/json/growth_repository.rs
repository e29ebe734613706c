use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::GrowthRecord;
use crate::storage::traits::GrowthRecordStorage;

const RECORD_SET: &str = "growth_records";

/// JSON-document-backed growth record repository.
///
/// The whole collection lives in one document and is rewritten on every
/// append (write-through). Insertion order is the document order.
#[derive(Clone)]
pub struct GrowthRepository {
    connection: JsonConnection,
}

impl GrowthRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load(&self) -> Vec<GrowthRecord> {
        let Some(text) = self.connection.read_document(RECORD_SET) else {
            return Vec::new();
        };

        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Stored growth records failed to decode, starting empty: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[GrowthRecord]) -> Result<()> {
        let text = serde_json::to_string_pretty(records)?;
        self.connection.write_document(RECORD_SET, &text)
    }
}

#[async_trait]
impl GrowthRecordStorage for GrowthRepository {
    async fn list_growth_records(&self) -> Result<Vec<GrowthRecord>> {
        Ok(self.load())
    }

    async fn append_growth_record(&self, record: &GrowthRecord) -> Result<()> {
        let mut records = self.load();
        records.push(record.clone());
        self.save(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn record(id: &str, weight_kg: f64, height_cm: f64) -> GrowthRecord {
        GrowthRecord {
            id: id.to_string(),
            date: Utc::now(),
            weight_kg,
            height_cm,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_empty_collection_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GrowthRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        assert!(repo.list_growth_records().await.unwrap().is_empty());
        repo.save(&[]).unwrap();
        assert!(repo.list_growth_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GrowthRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        repo.append_growth_record(&record("growth::1", 5.0, 55.0))
            .await
            .unwrap();
        repo.append_growth_record(&record("growth::2", 5.2, 57.0))
            .await
            .unwrap();

        let records = repo.list_growth_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "growth::1");
        assert_eq!(records[1].id, "growth::2");
        assert_eq!(records[1].weight_kg, 5.2);
    }

    #[tokio::test]
    async fn test_reload_after_restart_yields_equal_collection() {
        let temp_dir = TempDir::new().unwrap();

        {
            let repo = GrowthRepository::new(JsonConnection::new(temp_dir.path()).unwrap());
            repo.append_growth_record(&record("growth::1", 5.0, 55.0))
                .await
                .unwrap();
            repo.append_growth_record(&record("growth::2", 5.2, 57.0))
                .await
                .unwrap();
        }

        // A fresh connection over the same directory models a restart.
        let reopened = GrowthRepository::new(JsonConnection::new(temp_dir.path()).unwrap());
        let records = reopened.list_growth_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "growth::1");
        assert_eq!(records[1].id, "growth::2");
    }

    #[tokio::test]
    async fn test_corrupt_document_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        connection
            .write_document("growth_records", "[{\"id\":")
            .unwrap();

        let repo = GrowthRepository::new(connection);
        assert!(repo.list_growth_records().await.unwrap().is_empty());
    }
}
