use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

use crate::storage::ProfileStorage;
use shared::{CreateProfileRequest, GetProfileResponse, ProfileResponse};

use super::models::ChildProfile;
use crate::io::rest::mappers::ProfileMapper;

/// Service for managing the child profile.
///
/// Exactly zero or one profile exists; creating one again replaces it
/// wholesale.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStorage>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStorage>) -> Self {
        Self { store }
    }

    /// Create (or replace) the child profile.
    pub async fn set_profile(&self, request: CreateProfileRequest) -> Result<ProfileResponse> {
        info!(
            "Setting profile: name={}, birth_date={}",
            request.name, request.birth_date
        );

        let birth_date = Self::validate_request(&request)?;

        let now = Utc::now();
        let profile = ChildProfile {
            id: shared::ChildProfile::generate_id(super::next_record_timestamp(
                now.timestamp_millis() as u64,
            )),
            name: request.name.trim().to_string(),
            birth_date,
            sex: request.sex,
            created_at: now,
        };

        self.store.set_profile(&profile).await?;

        info!("Created profile for {} with ID: {}", profile.name, profile.id);

        Ok(ProfileMapper::to_profile_response_dto(
            profile,
            "Profile created successfully",
        ))
    }

    /// Get the profile, if one has been created.
    pub async fn get_profile(&self) -> Result<Option<ChildProfile>> {
        self.store.get_profile().await
    }

    /// Get the profile as a DTO response for the presentation layer.
    pub async fn get_profile_response(&self) -> Result<GetProfileResponse> {
        let profile = self.store.get_profile().await?;
        Ok(GetProfileResponse {
            profile: profile.map(ProfileMapper::to_dto),
        })
    }

    fn validate_request(request: &CreateProfileRequest) -> Result<NaiveDate> {
        if request.name.trim().is_empty() {
            return Err(anyhow::anyhow!("Child name cannot be empty"));
        }

        if request.name.len() > 100 {
            return Err(anyhow::anyhow!("Child name cannot exceed 100 characters"));
        }

        let birth_date = NaiveDate::parse_from_str(&request.birth_date, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Birth date must be in YYYY-MM-DD format"))?;

        let year = chrono::Datelike::year(&birth_date);
        if !(1900..=2100).contains(&year) {
            return Err(anyhow::anyhow!("Year must be between 1900 and 2100"));
        }

        Ok(birth_date)
    }
}
