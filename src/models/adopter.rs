use crate::error::AppError;
use crate::format;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Adopter {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Digits only on the wire
    pub cpf: String,
    /// Digits only on the wire
    pub phone: String,
    pub email: String,
    pub address: Address,
    #[serde(default)]
    pub registered_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter state abbreviation
    pub state: String,
    /// Digits only on the wire
    pub zip_code: String,
    #[serde(default)]
    pub complement: Option<String>,
}

impl Adopter {
    pub fn new() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            birth_date: None,
            cpf: String::new(),
            phone: String::new(),
            email: String::new(),
            address: Address::default(),
            registered_at: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Validates all fields of the adopter
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.trim().len() < 2 {
            return Err(AppError::Validation(
                "First name must have at least 2 characters".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Last name must not be empty".to_string(),
            ));
        }
        if !format::is_valid_cpf(&self.cpf) {
            return Err(AppError::Validation("CPF must have 11 digits".to_string()));
        }
        if !format::is_valid_phone(&self.phone) {
            return Err(AppError::Validation(
                "Phone must have 10 or 11 digits".to_string(),
            ));
        }
        if !format::is_valid_email(&self.email) {
            return Err(AppError::Validation(
                "Enter a valid email address".to_string(),
            ));
        }
        self.address.validate()
    }

    /// Strips CPF, phone and zip code down to digits before submission.
    pub fn normalized(&self) -> Self {
        let mut adopter = self.clone();
        adopter.cpf = format::digits_only(&adopter.cpf);
        adopter.phone = format::digits_only(&adopter.phone);
        adopter.address.zip_code = format::digits_only(&adopter.address.zip_code);
        adopter
    }
}

impl Address {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.street.trim().is_empty() {
            return Err(AppError::Validation(
                "Street must not be empty".to_string(),
            ));
        }
        if self.city.trim().is_empty() {
            return Err(AppError::Validation("City must not be empty".to_string()));
        }
        if self.state.trim().len() != 2 {
            return Err(AppError::Validation(
                "State must be a 2-letter abbreviation".to_string(),
            ));
        }
        if format::digits_only(&self.zip_code).len() != 8 {
            return Err(AppError::Validation("CEP must have 8 digits".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_adopter() -> Adopter {
        Adopter {
            id: None,
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15),
            cpf: "529.982.247-25".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: "ana@example.org".to_string(),
            address: Address {
                street: "Rua das Flores".to_string(),
                number: "120".to_string(),
                neighborhood: "Centro".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: "01310-100".to_string(),
                complement: None,
            },
            registered_at: None,
        }
    }

    #[test]
    fn test_valid_adopter_passes() {
        assert!(valid_adopter().validate().is_ok());
    }

    #[test]
    fn test_short_first_name_rejected() {
        let mut adopter = valid_adopter();
        adopter.first_name = "A".to_string();
        assert!(adopter.validate().is_err());
    }

    #[test]
    fn test_bad_cpf_rejected() {
        let mut adopter = valid_adopter();
        adopter.cpf = "123".to_string();
        assert!(adopter.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut adopter = valid_adopter();
        adopter.email = "ana@nowhere".to_string();
        assert!(adopter.validate().is_err());
    }

    #[test]
    fn test_normalized_strips_masks() {
        let adopter = valid_adopter().normalized();
        assert_eq!(adopter.cpf, "52998224725");
        assert_eq!(adopter.phone, "11987654321");
        assert_eq!(adopter.address.zip_code, "01310100");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(valid_adopter().full_name(), "Ana Souza");
    }
}
