use crate::error::AppError;
use crate::models::{Adopter, Cat};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Adoption {
    pub id: Option<i64>,
    pub cat_id: i64,
    pub adopter_id: i64,
    pub adoption_date: NaiveDate,
    pub status: AdoptionStatus,
    #[serde(default)]
    pub term_photo_url: Option<String>,
    /// Present when the backend embeds the resolved cat
    #[serde(default)]
    pub cat: Option<Cat>,
    /// Present when the backend embeds the resolved adopter
    #[serde(default)]
    pub adopter: Option<Adopter>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
    Pending,
    Completed,
    Canceled,
}

impl AdoptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AdoptionStatus::Pending => "PENDING",
            AdoptionStatus::Completed => "COMPLETED",
            AdoptionStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "COMPLETED" => AdoptionStatus::Completed,
            "CANCELED" => AdoptionStatus::Canceled,
            _ => AdoptionStatus::Pending,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            AdoptionStatus::Pending => "Pending",
            AdoptionStatus::Completed => "Completed",
            AdoptionStatus::Canceled => "Canceled",
        }
    }

    pub fn all() -> &'static [AdoptionStatus] {
        static ALL: [AdoptionStatus; 3] = [
            AdoptionStatus::Pending,
            AdoptionStatus::Completed,
            AdoptionStatus::Canceled,
        ];
        &ALL
    }
}

impl Adoption {
    pub fn new(cat_id: i64, adopter_id: i64, adoption_date: NaiveDate) -> Self {
        Self {
            id: None,
            cat_id,
            adopter_id,
            adoption_date,
            status: AdoptionStatus::Pending,
            term_photo_url: None,
            cat: None,
            adopter: None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.cat_id <= 0 {
            return Err(AppError::Validation("Select a cat".to_string()));
        }
        if self.adopter_id <= 0 {
            return Err(AppError::Validation("Select an adopter".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
    }

    #[test]
    fn test_new_adoption_starts_pending() {
        let adoption = Adoption::new(3, 7, date());
        assert_eq!(adoption.status, AdoptionStatus::Pending);
        assert!(adoption.validate().is_ok());
    }

    #[test]
    fn test_missing_references_rejected() {
        let adoption = Adoption::new(0, 7, date());
        assert!(adoption.validate().is_err());
        let adoption = Adoption::new(3, 0, date());
        assert!(adoption.validate().is_err());
    }

    #[test]
    fn test_wire_format_without_embeds() {
        let json = r#"{
            "id": 12,
            "catId": 3,
            "adopterId": 7,
            "adoptionDate": "2024-04-02",
            "status": "PENDING"
        }"#;
        let adoption: Adoption = serde_json::from_str(json).unwrap();
        assert_eq!(adoption.cat_id, 3);
        assert!(adoption.cat.is_none());
        assert!(adoption.term_photo_url.is_none());
    }
}
