use super::ListParams;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{Adoption, AdoptionStatus, Page};

/// Filters accepted by the adoption list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdoptionFilter {
    pub status: Option<AdoptionStatus>,
    pub cat_id: Option<i64>,
    pub adopter_id: Option<i64>,
    pub params: ListParams,
}

impl AdoptionFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.params.to_query();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(cat_id) = self.cat_id {
            query.push(("catId".to_string(), cat_id.to_string()));
        }
        if let Some(adopter_id) = self.adopter_id {
            query.push(("adopterId".to_string(), adopter_id.to_string()));
        }
        query
    }
}

/// Loads one page of adoptions matching the filter
pub async fn list_adoptions(
    client: &ApiClient,
    filter: &AdoptionFilter,
) -> Result<Page<Adoption>, AppError> {
    client.get_json("/adoptions", &filter.to_query()).await
}

/// Loads a single adoption by id
#[allow(dead_code)]
pub async fn get_adoption(client: &ApiClient, id: i64) -> Result<Adoption, AppError> {
    client
        .get_json::<Adoption>(&format!("/adoptions/{}", id), &[])
        .await
        .map_err(|e| match e {
            AppError::Api { status: 404, .. } => AppError::NotFound("Adoption".to_string()),
            other => other,
        })
}

/// Opens a new adoption process
pub async fn create_adoption(client: &ApiClient, adoption: &Adoption) -> Result<Adoption, AppError> {
    adoption.validate()?;
    client.post_json("/adoptions", adoption).await
}

/// Updates an existing adoption (status changes included)
pub async fn update_adoption(client: &ApiClient, adoption: &Adoption) -> Result<Adoption, AppError> {
    adoption.validate()?;
    let id = adoption
        .id
        .ok_or_else(|| AppError::Validation("Adoption must have an id".to_string()))?;
    client.put_json(&format!("/adoptions/{}", id), adoption).await
}

/// Removes an adoption record
pub async fn delete_adoption(client: &ApiClient, id: i64) -> Result<(), AppError> {
    client.delete(&format!("/adoptions/{}", id)).await
}

/// Number of adoptions in a given status, read from the page envelope
pub async fn count_adoptions(
    client: &ApiClient,
    status: Option<AdoptionStatus>,
) -> Result<usize, AppError> {
    let filter = AdoptionFilter {
        status,
        params: ListParams::page(0, 1),
        ..Default::default()
    };
    let page = list_adoptions(client, &filter).await?;
    Ok(page.total_elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_query() {
        let filter = AdoptionFilter {
            status: Some(AdoptionStatus::Pending),
            ..Default::default()
        };
        let query = filter.to_query();
        assert!(query.contains(&("status".to_string(), "PENDING".to_string())));
    }

    #[test]
    fn test_foreign_key_filters() {
        let filter = AdoptionFilter {
            cat_id: Some(3),
            adopter_id: Some(7),
            ..Default::default()
        };
        let query = filter.to_query();
        assert!(query.contains(&("catId".to_string(), "3".to_string())));
        assert!(query.contains(&("adopterId".to_string(), "7".to_string())));
    }
}
