use crate::domain::models::GrowthRecord as DomainGrowthRecord;
use shared::{GrowthHistoryResponse, GrowthRecord as SharedGrowthRecord, GrowthRecordResponse};

/// Mapper between the domain growth record model and the shared DTO.
pub struct GrowthMapper;

impl GrowthMapper {
    /// Converts a domain growth record to a shared DTO.
    pub fn to_dto(domain: DomainGrowthRecord) -> SharedGrowthRecord {
        SharedGrowthRecord {
            id: domain.id,
            date: domain.date.to_rfc3339(),
            weight_kg: domain.weight_kg,
            height_cm: domain.height_cm,
            notes: domain.notes,
        }
    }

    pub fn to_record_response_dto(
        domain: DomainGrowthRecord,
        message: &str,
    ) -> GrowthRecordResponse {
        GrowthRecordResponse {
            record: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_history_dto(records: Vec<DomainGrowthRecord>) -> GrowthHistoryResponse {
        GrowthHistoryResponse {
            records: records.into_iter().map(Self::to_dto).collect(),
        }
    }
}
