use crate::error::AppError;
use crate::models::Cat;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sterilization {
    pub id: Option<i64>,
    pub cat_id: i64,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub performed_date: Option<NaiveDate>,
    pub status: SterilizationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Present when the backend embeds the cat summary
    #[serde(default)]
    pub cat: Option<Cat>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SterilizationStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl SterilizationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SterilizationStatus::Scheduled => "SCHEDULED",
            SterilizationStatus::Completed => "COMPLETED",
            SterilizationStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "COMPLETED" => SterilizationStatus::Completed,
            "CANCELED" => SterilizationStatus::Canceled,
            _ => SterilizationStatus::Scheduled,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SterilizationStatus::Scheduled => "Scheduled",
            SterilizationStatus::Completed => "Completed",
            SterilizationStatus::Canceled => "Canceled",
        }
    }

    pub fn all() -> &'static [SterilizationStatus] {
        static ALL: [SterilizationStatus; 3] = [
            SterilizationStatus::Scheduled,
            SterilizationStatus::Completed,
            SterilizationStatus::Canceled,
        ];
        &ALL
    }
}

impl Sterilization {
    pub fn new(cat_id: i64, scheduled_date: NaiveDate) -> Self {
        Self {
            id: None,
            cat_id,
            scheduled_date,
            performed_date: None,
            status: SterilizationStatus::Scheduled,
            notes: None,
            cat: None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.cat_id <= 0 {
            return Err(AppError::Validation("Select a cat".to_string()));
        }
        if self.status == SterilizationStatus::Completed && self.performed_date.is_none() {
            return Err(AppError::Validation(
                "A completed sterilization needs the performed date".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_new_sterilization_is_scheduled() {
        let record = Sterilization::new(3, date());
        assert_eq!(record.status, SterilizationStatus::Scheduled);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_completed_requires_performed_date() {
        let mut record = Sterilization::new(3, date());
        record.status = SterilizationStatus::Completed;
        assert!(record.validate().is_err());

        record.performed_date = Some(date());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_status_fallback() {
        assert_eq!(
            SterilizationStatus::from_str("bogus"),
            SterilizationStatus::Scheduled
        );
    }
}
