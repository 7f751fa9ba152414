use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    pub id: Option<i64>,
    pub name: String,
    pub color: CatColor,
    pub sex: Sex,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub adoption_state: AdoptionState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatColor {
    Black,
    White,
    Gray,
    Orange,
    Calico,
    Tabby,
    Siamese,
    Other,
}

impl CatColor {
    pub fn as_str(&self) -> &str {
        match self {
            CatColor::Black => "black",
            CatColor::White => "white",
            CatColor::Gray => "gray",
            CatColor::Orange => "orange",
            CatColor::Calico => "calico",
            CatColor::Tabby => "tabby",
            CatColor::Siamese => "siamese",
            CatColor::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "black" => CatColor::Black,
            "white" => CatColor::White,
            "gray" | "grey" => CatColor::Gray,
            "orange" => CatColor::Orange,
            "calico" => CatColor::Calico,
            "tabby" => CatColor::Tabby,
            "siamese" => CatColor::Siamese,
            _ => CatColor::Other, // Default fallback
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CatColor::Black => "Black",
            CatColor::White => "White",
            CatColor::Gray => "Gray",
            CatColor::Orange => "Orange",
            CatColor::Calico => "Calico",
            CatColor::Tabby => "Tabby",
            CatColor::Siamese => "Siamese",
            CatColor::Other => "Other",
        }
    }

    pub fn all() -> &'static [CatColor] {
        static ALL: [CatColor; 8] = [
            CatColor::Black,
            CatColor::White,
            CatColor::Gray,
            CatColor::Orange,
            CatColor::Calico,
            CatColor::Tabby,
            CatColor::Siamese,
            CatColor::Other,
        ];
        &ALL
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "male" => Sex::Male,
            "female" => Sex::Female,
            _ => Sex::Unknown,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Unknown => "Unknown",
        }
    }
}

/// Where a cat stands in the adoption pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionState {
    NotAdopted,
    InProcess,
    Adopted,
}

impl AdoptionState {
    pub fn as_str(&self) -> &str {
        match self {
            AdoptionState::NotAdopted => "NOT_ADOPTED",
            AdoptionState::InProcess => "IN_PROCESS",
            AdoptionState::Adopted => "ADOPTED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "IN_PROCESS" => AdoptionState::InProcess,
            "ADOPTED" => AdoptionState::Adopted,
            _ => AdoptionState::NotAdopted,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            AdoptionState::NotAdopted => "Available",
            AdoptionState::InProcess => "In process",
            AdoptionState::Adopted => "Adopted",
        }
    }

    pub fn all() -> &'static [AdoptionState] {
        static ALL: [AdoptionState; 3] = [
            AdoptionState::NotAdopted,
            AdoptionState::InProcess,
            AdoptionState::Adopted,
        ];
        &ALL
    }
}

impl Cat {
    /// Creates a new cat entering the shelter today-equivalent `entry_date`
    pub fn new(name: String, entry_date: NaiveDate) -> Self {
        Self {
            id: None,
            name,
            color: CatColor::Other,
            sex: Sex::Unknown,
            birth_date: None,
            entry_date,
            photo_url: None,
            adoption_state: AdoptionState::NotAdopted,
        }
    }

    /// Validates all fields of the cat
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        if self.name.len() > 100 {
            return Err(AppError::Validation(
                "Name must not exceed 100 characters".to_string(),
            ));
        }

        if let Some(birth) = self.birth_date {
            if birth > self.entry_date {
                return Err(AppError::Validation(
                    "Birth date cannot be after the shelter entry date".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_new_cat() {
        let cat = Cat::new("Mimi".to_string(), entry());
        assert_eq!(cat.name, "Mimi");
        assert_eq!(cat.adoption_state, AdoptionState::NotAdopted);
        assert!(cat.id.is_none());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut cat = Cat::new("".to_string(), entry());
        cat.name = "   ".to_string();
        assert!(cat.validate().is_err());
    }

    #[test]
    fn test_validate_birth_after_entry() {
        let mut cat = Cat::new("Mimi".to_string(), entry());
        cat.birth_date = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(cat.validate().is_err());

        cat.birth_date = NaiveDate::from_ymd_opt(2023, 5, 1);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_adoption_state_conversion() {
        assert_eq!(AdoptionState::from_str("ADOPTED"), AdoptionState::Adopted);
        assert_eq!(
            AdoptionState::from_str("IN_PROCESS"),
            AdoptionState::InProcess
        );
        assert_eq!(
            AdoptionState::from_str("anything"),
            AdoptionState::NotAdopted
        );
    }

    #[test]
    fn test_cat_wire_format() {
        let json = r#"{
            "id": 4,
            "name": "Frajola",
            "color": "black",
            "sex": "male",
            "birthDate": "2022-10-05",
            "entryDate": "2024-01-12",
            "photoUrl": null,
            "adoptionState": "IN_PROCESS"
        }"#;
        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, Some(4));
        assert_eq!(cat.color, CatColor::Black);
        assert_eq!(cat.adoption_state, AdoptionState::InProcess);
    }
}
