use crate::domain::models::MealRecord as DomainMealRecord;
use shared::{MealListResponse, MealRecord as SharedMealRecord, MealRecordResponse};

/// Mapper between the domain meal record model and the shared DTO.
pub struct MealMapper;

impl MealMapper {
    /// Converts a domain meal record to a shared DTO.
    pub fn to_dto(domain: DomainMealRecord) -> SharedMealRecord {
        SharedMealRecord {
            id: domain.id,
            date: domain.date.to_rfc3339(),
            meal_type: domain.meal_type,
            description: domain.description,
            image_url: domain.image_url,
        }
    }

    pub fn to_record_response_dto(domain: DomainMealRecord, message: &str) -> MealRecordResponse {
        MealRecordResponse {
            record: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_meal_list_dto(records: Vec<DomainMealRecord>) -> MealListResponse {
        MealListResponse {
            meals: records.into_iter().map(Self::to_dto).collect(),
        }
    }
}
