use crate::config;
use crate::error::AppError;
use crate::format;
use crate::models::Address;
use serde::Deserialize;

/// Response of the public CEP lookup service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CepAddress {
    #[serde(default)]
    pub cep: String,
    /// Street
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    /// Neighborhood
    #[serde(default)]
    pub bairro: String,
    /// City
    #[serde(default)]
    pub localidade: String,
    /// State abbreviation
    #[serde(default)]
    pub uf: String,
    /// Set by the service when the CEP does not exist
    #[serde(default)]
    pub erro: bool,
}

impl CepAddress {
    /// Copies the looked-up fields onto an adopter address, leaving
    /// number and complement for the user to fill in.
    pub fn apply_to(&self, address: &mut Address) {
        address.street = self.logradouro.clone();
        address.neighborhood = self.bairro.clone();
        address.city = self.localidade.clone();
        address.state = self.uf.clone();
    }
}

/// Looks up an address by CEP.
///
/// This hits the public lookup service directly, outside `ApiClient`,
/// so no bearer token ever leaves the app here.
pub async fn lookup_cep(cep: &str) -> Result<CepAddress, AppError> {
    let digits = format::digits_only(cep);
    if digits.len() != 8 {
        return Err(AppError::Validation("CEP must have 8 digits".to_string()));
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .connect_timeout(std::time::Duration::from_secs(10))
        .user_agent("Gatil/0.1.0")
        .build()
        .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))?;

    let url = format!(
        "{}/{}/json/",
        config::get().cep_base_url.trim_end_matches('/'),
        digits
    );
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::Api {
            status: response.status().as_u16(),
            message: None,
        });
    }

    let address = response
        .json::<CepAddress>()
        .await
        .map_err(|e| AppError::Json(e.to_string()))?;
    if address.erro {
        return Err(AppError::NotFound("CEP".to_string()));
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_response_parses() {
        let json = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        }"#;
        let address: CepAddress = serde_json::from_str(json).unwrap();
        assert_eq!(address.logradouro, "Avenida Paulista");
        assert!(!address.erro);
    }

    #[test]
    fn test_unknown_cep_flag_parses() {
        let address: CepAddress = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(address.erro);
    }

    #[test]
    fn test_apply_to_fills_address_fields() {
        let lookup = CepAddress {
            cep: "01310-100".to_string(),
            logradouro: "Avenida Paulista".to_string(),
            complemento: String::new(),
            bairro: "Bela Vista".to_string(),
            localidade: "São Paulo".to_string(),
            uf: "SP".to_string(),
            erro: false,
        };
        let mut address = Address {
            number: "42".to_string(),
            ..Default::default()
        };
        lookup.apply_to(&mut address);
        assert_eq!(address.street, "Avenida Paulista");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.state, "SP");
        // User-entered fields stay untouched
        assert_eq!(address.number, "42");
    }
}
