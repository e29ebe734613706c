use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::storage::MealRecordStorage;
use shared::{AddMealRecordRequest, DeleteMealRecordResponse, MealListResponse, MealRecordResponse};

use super::models::MealRecord;
use crate::io::rest::mappers::MealMapper;

/// Service for the meal diary.
#[derive(Clone)]
pub struct MealService {
    store: Arc<dyn MealRecordStorage>,
}

impl MealService {
    pub fn new(store: Arc<dyn MealRecordStorage>) -> Self {
        Self { store }
    }

    /// Log a meal.
    pub async fn add_meal_record(&self, request: AddMealRecordRequest) -> Result<MealRecordResponse> {
        info!(
            "Adding meal record: type={}, description={}",
            request.meal_type, request.description
        );

        if request.description.trim().is_empty() {
            return Err(anyhow::anyhow!("Meal description cannot be empty"));
        }

        let now = Utc::now();
        let date = match request.date {
            Some(ref raw) => chrono::DateTime::parse_from_rfc3339(raw)
                .map_err(|_| anyhow::anyhow!("Record date must be RFC 3339"))?
                .with_timezone(&Utc),
            None => now,
        };

        let record = MealRecord {
            id: shared::MealRecord::generate_id(super::next_record_timestamp(
                now.timestamp_millis() as u64,
            )),
            date,
            meal_type: request.meal_type,
            description: request.description.trim().to_string(),
            image_url: request.image_url,
        };

        self.store.append_meal_record(&record).await?;

        info!("Logged meal with ID: {}", record.id);

        Ok(MealMapper::to_record_response_dto(
            record,
            "Meal logged successfully",
        ))
    }

    /// All logged meals in insertion order.
    pub async fn list_meals(&self) -> Result<Vec<MealRecord>> {
        self.store.list_meal_records().await
    }

    /// The meal list as a DTO response.
    pub async fn meal_list_response(&self) -> Result<MealListResponse> {
        let meals = self.list_meals().await?;
        Ok(MealMapper::to_meal_list_dto(meals))
    }

    /// The `count` most recently logged meals (insertion order), used as
    /// context for meal suggestions.
    pub async fn recent_meals(&self, count: usize) -> Result<Vec<MealRecord>> {
        let meals = self.list_meals().await?;
        let start = meals.len().saturating_sub(count);
        Ok(meals[start..].to_vec())
    }

    /// Remove a meal by ID. An unknown ID is a no-op, not an error.
    pub async fn remove_meal_record(&self, record_id: &str) -> Result<DeleteMealRecordResponse> {
        info!("Removing meal record: {}", record_id);

        let removed = self.store.remove_meal_record(record_id).await?;

        let success_message = if removed {
            "Meal removed successfully".to_string()
        } else {
            format!("No meal found with ID: {}", record_id)
        };

        Ok(DeleteMealRecordResponse {
            removed,
            success_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonConnection, MealRepository};
    use shared::MealType;
    use tempfile::TempDir;

    fn setup_test() -> (MealService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let service = MealService::new(Arc::new(MealRepository::new(connection)));
        (service, temp_dir)
    }

    fn add_request(meal_type: MealType, description: &str) -> AddMealRecordRequest {
        AddMealRecordRequest {
            meal_type,
            description: description.to_string(),
            image_url: None,
            date: None,
        }
    }

    #[tokio::test]
    async fn test_add_meal_record() {
        let (service, _temp_dir) = setup_test();

        let response = service
            .add_meal_record(add_request(MealType::Breakfast, "rice porridge with egg"))
            .await
            .expect("Failed to add meal");

        assert!(response.record.id.starts_with("meal::"));
        assert_eq!(response.record.meal_type, MealType::Breakfast);
        assert_eq!(response.record.description, "rice porridge with egg");
    }

    #[tokio::test]
    async fn test_add_meal_record_rejects_empty_description() {
        let (service, _temp_dir) = setup_test();

        let result = service.add_meal_record(add_request(MealType::Lunch, "   ")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_add_then_remove_leaves_collection_unchanged() {
        let (service, _temp_dir) = setup_test();

        service
            .add_meal_record(add_request(MealType::Breakfast, "oatmeal"))
            .await
            .unwrap();
        let before = service.list_meals().await.unwrap();

        let response = service
            .add_meal_record(add_request(MealType::Snack, "yogurt"))
            .await
            .unwrap();
        service
            .remove_meal_record(&response.record.id)
            .await
            .unwrap();

        let after = service.list_meals().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let (service, _temp_dir) = setup_test();

        service
            .add_meal_record(add_request(MealType::Dinner, "fish congee"))
            .await
            .unwrap();

        let response = service.remove_meal_record("meal::999").await.unwrap();
        assert!(!response.removed);
        assert_eq!(service.list_meals().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_recent_meals_returns_last_n_in_order() {
        let (service, _temp_dir) = setup_test();

        for description in ["a", "b", "c", "d", "e", "f", "g"] {
            service
                .add_meal_record(add_request(MealType::Snack, description))
                .await
                .unwrap();
        }

        let recent = service.recent_meals(5).await.unwrap();
        let descriptions: Vec<&str> = recent.iter().map(|m| m.description.as_str()).collect();
        assert_eq!(descriptions, vec!["c", "d", "e", "f", "g"]);

        // Asking for more than exist returns everything.
        assert_eq!(service.recent_meals(100).await.unwrap().len(), 7);
    }
}
