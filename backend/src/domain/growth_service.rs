use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::storage::GrowthRecordStorage;
use shared::{
    AddGrowthRecordRequest, GrowthHistoryResponse, GrowthRecordResponse, GrowthStatusResponse,
    GrowthTrendResponse, TrendPoint,
};

use super::growth_metrics;
use super::models::{ChildProfile, GrowthRecord};
use super::standards::Metric;
use crate::io::rest::mappers::GrowthMapper;

/// Service for recording measurements and deriving growth summaries.
#[derive(Clone)]
pub struct GrowthService {
    store: Arc<dyn GrowthRecordStorage>,
}

impl GrowthService {
    pub fn new(store: Arc<dyn GrowthRecordStorage>) -> Self {
        Self { store }
    }

    /// Record a new measurement. Appends; records are never edited or
    /// deleted.
    pub async fn add_growth_record(
        &self,
        request: AddGrowthRecordRequest,
    ) -> Result<GrowthRecordResponse> {
        info!(
            "Adding growth record: weight={}kg, height={}cm",
            request.weight_kg, request.height_cm
        );

        // Stricter than the original, which admitted non-positive values.
        if request.weight_kg <= 0.0 {
            return Err(anyhow::anyhow!("Weight must be a positive number"));
        }
        if request.height_cm <= 0.0 {
            return Err(anyhow::anyhow!("Height must be a positive number"));
        }

        let now = Utc::now();
        let date = match request.date {
            Some(ref raw) => chrono::DateTime::parse_from_rfc3339(raw)
                .map_err(|_| anyhow::anyhow!("Record date must be RFC 3339"))?
                .with_timezone(&Utc),
            None => now,
        };

        let record = GrowthRecord {
            id: shared::GrowthRecord::generate_id(super::next_record_timestamp(
                now.timestamp_millis() as u64,
            )),
            date,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            notes: request.notes,
        };

        self.store.append_growth_record(&record).await?;

        info!("Recorded measurement with ID: {}", record.id);

        Ok(GrowthMapper::to_record_response_dto(
            record,
            "Measurement recorded successfully",
        ))
    }

    /// All records in insertion order.
    pub async fn list_records(&self) -> Result<Vec<GrowthRecord>> {
        self.store.list_growth_records().await
    }

    /// The full history as a DTO response.
    pub async fn history_response(&self) -> Result<GrowthHistoryResponse> {
        let records = self.list_records().await?;
        Ok(GrowthMapper::to_history_dto(records))
    }

    /// The record treated as the child's current status (last appended).
    pub async fn latest(&self) -> Result<Option<GrowthRecord>> {
        let records = self.list_records().await?;
        Ok(growth_metrics::latest_of(&records).cloned())
    }

    /// Current status summary: age, latest measurement, and how it compares
    /// to the reference median at the child's current age.
    pub async fn growth_status(&self, profile: &ChildProfile) -> Result<GrowthStatusResponse> {
        let records = self.list_records().await?;
        let age_months =
            growth_metrics::age_in_months(profile.birth_date, Utc::now().date_naive());

        let latest = growth_metrics::latest_of(&records);
        let comparison = latest.map(|record| {
            growth_metrics::compare_to_standard(
                profile.sex,
                age_months,
                record.weight_kg,
                record.height_cm,
            )
        });

        Ok(GrowthStatusResponse {
            age_months,
            latest: latest.cloned().map(GrowthMapper::to_dto),
            comparison,
        })
    }

    /// Chartable trend: one point per record, indexed by the child's age at
    /// the time of recording, with the reference medians alongside.
    pub async fn growth_trend(&self, profile: &ChildProfile) -> Result<GrowthTrendResponse> {
        let records = self.list_records().await?;

        let points = records
            .iter()
            .map(|record| {
                let age_months =
                    growth_metrics::age_in_months(profile.birth_date, record.date.date_naive());
                TrendPoint {
                    age_months,
                    weight_kg: record.weight_kg,
                    height_cm: record.height_cm,
                    median_weight_kg: growth_metrics::median_for(
                        profile.sex,
                        Metric::Weight,
                        age_months,
                    ),
                    median_height_cm: growth_metrics::median_for(
                        profile.sex,
                        Metric::Height,
                        age_months,
                    ),
                }
            })
            .collect();

        Ok(GrowthTrendResponse { points })
    }
}
