use super::ListParams;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{Page, Sterilization, SterilizationStatus};

/// Filters accepted by the sterilization list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SterilizationFilter {
    pub status: Option<SterilizationStatus>,
    pub cat_id: Option<i64>,
    pub params: ListParams,
}

impl SterilizationFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.params.to_query();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(cat_id) = self.cat_id {
            query.push(("catId".to_string(), cat_id.to_string()));
        }
        query
    }
}

/// Loads one page of sterilizations matching the filter
pub async fn list_sterilizations(
    client: &ApiClient,
    filter: &SterilizationFilter,
) -> Result<Page<Sterilization>, AppError> {
    client.get_json("/sterilizations", &filter.to_query()).await
}

/// Schedules a sterilization for a cat
pub async fn create_sterilization(
    client: &ApiClient,
    record: &Sterilization,
) -> Result<Sterilization, AppError> {
    record.validate()?;
    client.post_json("/sterilizations", record).await
}

/// Updates a sterilization (completion and cancellation included)
pub async fn update_sterilization(
    client: &ApiClient,
    record: &Sterilization,
) -> Result<Sterilization, AppError> {
    record.validate()?;
    let id = record
        .id
        .ok_or_else(|| AppError::Validation("Sterilization must have an id".to_string()))?;
    client
        .put_json(&format!("/sterilizations/{}", id), record)
        .await
}

/// Removes a sterilization record
pub async fn delete_sterilization(client: &ApiClient, id: i64) -> Result<(), AppError> {
    client.delete(&format!("/sterilizations/{}", id)).await
}

/// Number of sterilizations in a given status
pub async fn count_sterilizations(
    client: &ApiClient,
    status: Option<SterilizationStatus>,
) -> Result<usize, AppError> {
    let filter = SterilizationFilter {
        status,
        params: ListParams::page(0, 1),
        ..Default::default()
    };
    let page = list_sterilizations(client, &filter).await?;
    Ok(page.total_elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query() {
        let filter = SterilizationFilter {
            status: Some(SterilizationStatus::Scheduled),
            cat_id: Some(5),
            params: ListParams::page(0, 20),
        };
        let query = filter.to_query();
        assert!(query.contains(&("status".to_string(), "SCHEDULED".to_string())));
        assert!(query.contains(&("catId".to_string(), "5".to_string())));
        assert!(query.contains(&("size".to_string(), "20".to_string())));
    }
}
