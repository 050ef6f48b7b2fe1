use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Input for registering a patient.
///
/// Values are carried as submitted. Empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientCommand {
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`, or a date-time whose time of day is discarded.
    #[serde(deserialize_with = "date_or_datetime")]
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

/// Parses a date of birth given either as a calendar date or as a date-time.
///
/// Date-times may be local (`1990-01-01T08:30:00`) or RFC 3339 with an offset
/// (`1990-01-01T08:30:00Z`). The date is taken as written, without converting
/// the offset to UTC.
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
}

fn date_or_datetime<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_of_birth(&raw).map_err(de::Error::custom)
}
