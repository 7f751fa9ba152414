use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-text note attached to a cat's record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Option<i64>,
    pub cat_id: i64,
    pub date: NaiveDate,
    pub text: String,
}

impl Note {
    pub fn new(cat_id: i64, date: NaiveDate, text: String) -> Self {
        Self {
            id: None,
            cat_id,
            date,
            text,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::Validation("Note must not be empty".to_string()));
        }
        if self.text.len() > 2000 {
            return Err(AppError::Validation(
                "Note must not exceed 2000 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_note_rejected() {
        let note = Note::new(1, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(), "  ".into());
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_valid_note_passes() {
        let note = Note::new(
            1,
            NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            "Vaccinated against rabies".into(),
        );
        assert!(note.validate().is_ok());
    }
}
