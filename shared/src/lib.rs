use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used to select the reference growth standard.
///
/// Serialized as the uppercase strings the stored documents use
/// ("MALE" / "FEMALE").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "boy"),
            Sex::Female => write!(f, "girl"),
        }
    }
}

/// The child profile. At most one exists per data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    /// Profile ID in format: "profile::<epoch_millis>"
    pub id: String,
    /// Child's name (non-empty, max 100 characters)
    pub name: String,
    /// Birth date in ISO 8601 date format (YYYY-MM-DD)
    pub birth_date: String,
    pub sex: Sex,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// A single weight/height measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    /// Record ID in format: "growth::<epoch_millis>"
    pub id: String,
    /// When the measurement was recorded (RFC 3339)
    pub date: String,
    /// Weight in kilograms (positive)
    pub weight_kg: f64,
    /// Height in centimeters (positive)
    pub height_cm: f64,
    /// Optional free-text note
    pub notes: Option<String>,
}

/// Meal slot for a diary entry.
///
/// Serialized through its display string so that decoding a stored document
/// with an unknown value fails with a clearly named error instead of
/// admitting arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = MealTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Breakfast" => Ok(MealType::Breakfast),
            "Lunch" => Ok(MealType::Lunch),
            "Dinner" => Ok(MealType::Dinner),
            "Snack" => Ok(MealType::Snack),
            other => Err(MealTypeError::Unrecognized(other.to_string())),
        }
    }
}

impl TryFrom<String> for MealType {
    type Error = MealTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MealType> for String {
    fn from(value: MealType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MealTypeError {
    Unrecognized(String),
}

impl fmt::Display for MealTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealTypeError::Unrecognized(value) => {
                write!(f, "Unrecognized meal type: {}", value)
            }
        }
    }
}

impl std::error::Error for MealTypeError {}

/// A meal diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Record ID in format: "meal::<epoch_millis>"
    pub id: String,
    /// When the meal was logged (RFC 3339)
    pub date: String,
    pub meal_type: MealType,
    /// What the child ate (free text)
    pub description: String,
    /// Optional reference to a photo of the meal
    pub image_url: Option<String>,
}

/// A single AI-suggested dish. Ephemeral: held in memory only, replaced
/// wholesale on every refresh, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    /// Which meal slot the dish is suggested for (e.g. "Breakfast")
    pub suggested_for: String,
    pub dish_name: String,
    pub description: String,
    /// Ingredient names, in the order they appear in the recipe
    pub ingredients: Vec<String>,
    /// Very short cooking instructions
    pub instructions: String,
    pub nutritional_benefits: String,
}

/// Request for creating the child profile (onboarding)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProfileRequest {
    pub name: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    pub birth_date: String,
    pub sex: Sex,
}

/// Response after creating the profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub profile: ChildProfile,
    pub success_message: String,
}

/// Response containing the profile, if one has been created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetProfileResponse {
    pub profile: Option<ChildProfile>,
}

/// Request for recording a new measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddGrowthRecordRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub notes: Option<String>,
    /// Optional date override (RFC 3339) - uses current time if not provided
    pub date: Option<String>,
}

/// Response after recording a measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthRecordResponse {
    pub record: GrowthRecord,
    pub success_message: String,
}

/// Response containing the full growth history in insertion order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthHistoryResponse {
    pub records: Vec<GrowthRecord>,
}

/// One point of the growth trend, indexed by the child's age at recording
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub age_months: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Reference median weight for this age and the child's sex
    pub median_weight_kg: f64,
    /// Reference median height for this age and the child's sex
    pub median_height_cm: f64,
}

/// Response containing the chartable growth trend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthTrendResponse {
    pub points: Vec<TrendPoint>,
}

/// Current growth status for the summary card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthStatusResponse {
    /// Whole months since birth, clamped to zero
    pub age_months: u32,
    /// Most recently added record (insertion order, not date order)
    pub latest: Option<GrowthRecord>,
    pub comparison: Option<MedianComparison>,
}

/// How the latest measurement compares to the reference median
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedianComparison {
    pub median_weight_kg: f64,
    pub median_height_cm: f64,
    /// Measured weight as a percentage of the median (100.0 = exactly median)
    pub weight_percent_of_median: f64,
    /// Measured height as a percentage of the median
    pub height_percent_of_median: f64,
    pub below_median_weight: bool,
    pub below_median_height: bool,
}

/// Request for logging a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddMealRecordRequest {
    pub meal_type: MealType,
    pub description: String,
    pub image_url: Option<String>,
    /// Optional date override (RFC 3339) - uses current time if not provided
    pub date: Option<String>,
}

/// Response after logging a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecordResponse {
    pub record: MealRecord,
    pub success_message: String,
}

/// Response containing all logged meals in insertion order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealListResponse {
    pub meals: Vec<MealRecord>,
}

/// Response after deleting a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteMealRecordResponse {
    /// False when the ID was unknown (a no-op, not an error)
    pub removed: bool,
    pub success_message: String,
}

/// Response containing a fresh batch of meal suggestions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSuggestionsResponse {
    pub suggestions: Vec<MealSuggestion>,
}

/// Response containing AI growth commentary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthAnalysisResponse {
    pub commentary: String,
}

impl ChildProfile {
    /// Generate a profile ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("profile::{}", epoch_millis)
    }
}

impl GrowthRecord {
    /// Generate a growth record ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("growth::{}", epoch_millis)
    }

    /// Parse a growth record ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, RecordIdError> {
        parse_prefixed_id(id, "growth")
    }
}

impl MealRecord {
    /// Generate a meal record ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("meal::{}", epoch_millis)
    }

    /// Parse a meal record ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, RecordIdError> {
        parse_prefixed_id(id, "meal")
    }
}

fn parse_prefixed_id(id: &str, prefix: &str) -> Result<u64, RecordIdError> {
    let parts: Vec<&str> = id.split("::").collect();
    if parts.len() != 2 || parts[0] != prefix {
        return Err(RecordIdError::InvalidFormat);
    }

    parts[1]
        .parse::<u64>()
        .map_err(|_| RecordIdError::InvalidTimestamp)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for RecordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIdError::InvalidFormat => write!(f, "Invalid record ID format"),
            RecordIdError::InvalidTimestamp => write!(f, "Invalid timestamp in record ID"),
        }
    }
}

impl std::error::Error for RecordIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_record_ids() {
        assert_eq!(
            GrowthRecord::generate_id(1702516122000),
            "growth::1702516122000"
        );
        assert_eq!(
            MealRecord::generate_id(1702516125000),
            "meal::1702516125000"
        );
        assert_eq!(
            ChildProfile::generate_id(1702516130000),
            "profile::1702516130000"
        );
    }

    #[test]
    fn test_parse_record_ids() {
        assert_eq!(
            GrowthRecord::parse_id("growth::1702516122000").unwrap(),
            1702516122000
        );
        assert_eq!(
            MealRecord::parse_id("meal::1702516122000").unwrap(),
            1702516122000
        );

        // Wrong prefix
        assert!(GrowthRecord::parse_id("meal::1702516122000").is_err());
        assert!(MealRecord::parse_id("growth::1702516122000").is_err());

        // Invalid format
        assert!(GrowthRecord::parse_id("growth").is_err());
        assert!(GrowthRecord::parse_id("growth::1::2").is_err());

        // Invalid timestamp
        assert!(GrowthRecord::parse_id("growth::not_a_number").is_err());
    }

    #[test]
    fn test_meal_type_round_trip() {
        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            let parsed: MealType = meal_type.as_str().parse().unwrap();
            assert_eq!(parsed, meal_type);
        }
    }

    #[test]
    fn test_meal_type_rejects_unknown_string() {
        let err = "Brunch".parse::<MealType>().unwrap_err();
        assert_eq!(err, MealTypeError::Unrecognized("Brunch".to_string()));
        assert_eq!(err.to_string(), "Unrecognized meal type: Brunch");
    }

    #[test]
    fn test_meal_type_decode_fails_on_unknown_value() {
        // Stored documents with an unrecognized meal type must fail decoding
        // rather than silently admitting arbitrary strings.
        let json = r#"{"id":"meal::1","date":"2024-01-01T08:00:00Z","meal_type":"Elevenses","description":"toast","image_url":null}"#;
        let result: Result<MealRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unrecognized meal type"));
    }

    #[test]
    fn test_sex_serialization_matches_stored_format() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"MALE\"");
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"FEMALE\"");
        let parsed: Sex = serde_json::from_str("\"FEMALE\"").unwrap();
        assert_eq!(parsed, Sex::Female);
    }
}
