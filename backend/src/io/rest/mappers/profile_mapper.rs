use crate::domain::models::ChildProfile as DomainProfile;
use shared::{ChildProfile as SharedProfile, ProfileResponse};

/// Mapper between the domain profile model and the shared profile DTO.
pub struct ProfileMapper;

impl ProfileMapper {
    /// Converts a domain profile to a shared DTO.
    pub fn to_dto(domain: DomainProfile) -> SharedProfile {
        SharedProfile {
            id: domain.id,
            name: domain.name,
            birth_date: domain.birth_date.format("%Y-%m-%d").to_string(),
            sex: domain.sex,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_profile_response_dto(domain: DomainProfile, message: &str) -> ProfileResponse {
        ProfileResponse {
            profile: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }
}
