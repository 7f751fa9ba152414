use super::ListParams;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::format;
use crate::models::{Adopter, Page};

/// Filters accepted by the adopter list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdopterFilter {
    pub name: Option<String>,
    pub city: Option<String>,
    pub cpf: Option<String>,
    pub params: ListParams,
}

impl AdopterFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.params.to_query();
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                query.push(("name".to_string(), name.trim().to_string()));
            }
        }
        if let Some(city) = &self.city {
            if !city.trim().is_empty() {
                query.push(("city".to_string(), city.trim().to_string()));
            }
        }
        if let Some(cpf) = &self.cpf {
            let digits = format::digits_only(cpf);
            if !digits.is_empty() {
                query.push(("cpf".to_string(), digits));
            }
        }
        query
    }
}

/// Loads one page of adopters matching the filter
pub async fn list_adopters(
    client: &ApiClient,
    filter: &AdopterFilter,
) -> Result<Page<Adopter>, AppError> {
    client.get_json("/adopters", &filter.to_query()).await
}

/// Loads a single adopter by id
pub async fn get_adopter(client: &ApiClient, id: i64) -> Result<Adopter, AppError> {
    client
        .get_json::<Adopter>(&format!("/adopters/{}", id), &[])
        .await
        .map_err(|e| match e {
            AppError::Api { status: 404, .. } => AppError::NotFound("Adopter".to_string()),
            other => other,
        })
}

/// Registers a new adopter. CPF, phone and CEP are stripped to digits
/// before they reach the wire.
pub async fn create_adopter(client: &ApiClient, adopter: &Adopter) -> Result<Adopter, AppError> {
    adopter.validate()?;
    client.post_json("/adopters", &adopter.normalized()).await
}

/// Updates an existing adopter
pub async fn update_adopter(client: &ApiClient, adopter: &Adopter) -> Result<Adopter, AppError> {
    adopter.validate()?;
    let id = adopter
        .id
        .ok_or_else(|| AppError::Validation("Adopter must have an id".to_string()))?;
    client
        .put_json(&format!("/adopters/{}", id), &adopter.normalized())
        .await
}

/// Removes an adopter
pub async fn delete_adopter(client: &ApiClient, id: i64) -> Result<(), AppError> {
    client.delete(&format!("/adopters/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_filter_is_sent_as_digits() {
        let filter = AdopterFilter {
            cpf: Some("529.982.247-25".to_string()),
            ..Default::default()
        };
        let query = filter.to_query();
        assert!(query.contains(&("cpf".to_string(), "52998224725".to_string())));
    }

    #[test]
    fn test_blank_filters_not_sent() {
        let filter = AdopterFilter {
            name: Some("".to_string()),
            city: Some("  ".to_string()),
            cpf: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.to_query().len(), 2); // page + size only
    }
}
