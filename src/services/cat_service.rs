use super::ListParams;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{AdoptionState, Cat, CatColor, Page, Sex};

/// Filters accepted by the cat list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatFilter {
    pub name: Option<String>,
    pub color: Option<CatColor>,
    pub sex: Option<Sex>,
    pub adoption_state: Option<AdoptionState>,
    pub params: ListParams,
}

impl CatFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.params.to_query();
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                query.push(("name".to_string(), name.trim().to_string()));
            }
        }
        if let Some(color) = self.color {
            query.push(("color".to_string(), color.as_str().to_string()));
        }
        if let Some(sex) = self.sex {
            query.push(("sex".to_string(), sex.as_str().to_string()));
        }
        if let Some(state) = self.adoption_state {
            query.push(("adoptionState".to_string(), state.as_str().to_string()));
        }
        query
    }
}

/// Loads one page of cats matching the filter
pub async fn list_cats(client: &ApiClient, filter: &CatFilter) -> Result<Page<Cat>, AppError> {
    client.get_json("/cats", &filter.to_query()).await
}

/// Loads a single cat by id
pub async fn get_cat(client: &ApiClient, id: i64) -> Result<Cat, AppError> {
    client
        .get_json::<Cat>(&format!("/cats/{}", id), &[])
        .await
        .map_err(|e| match e {
            AppError::Api { status: 404, .. } => AppError::NotFound("Cat".to_string()),
            other => other,
        })
}

/// Registers a new cat
pub async fn create_cat(client: &ApiClient, cat: &Cat) -> Result<Cat, AppError> {
    cat.validate()?;
    client.post_json("/cats", cat).await
}

/// Updates an existing cat
pub async fn update_cat(client: &ApiClient, cat: &Cat) -> Result<Cat, AppError> {
    cat.validate()?;
    let id = cat
        .id
        .ok_or_else(|| AppError::Validation("Cat must have an id".to_string()))?;
    client.put_json(&format!("/cats/{}", id), cat).await
}

/// Removes a cat from the inventory
pub async fn delete_cat(client: &ApiClient, id: i64) -> Result<(), AppError> {
    client.delete(&format!("/cats/{}", id)).await
}

/// Total number of cats in a given state, read from the page envelope
/// of a single-row request.
pub async fn count_cats(
    client: &ApiClient,
    state: Option<AdoptionState>,
) -> Result<usize, AppError> {
    let filter = CatFilter {
        adoption_state: state,
        params: ListParams::page(0, 1),
        ..Default::default()
    };
    let page = list_cats(client, &filter).await?;
    Ok(page.total_elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_sends_only_paging() {
        let filter = CatFilter::default();
        assert_eq!(filter.to_query().len(), 2); // page + size
    }

    #[test]
    fn test_blank_name_is_not_sent() {
        let filter = CatFilter {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!filter.to_query().iter().any(|(k, _)| k == "name"));
    }

    #[test]
    fn test_full_filter_query() {
        let filter = CatFilter {
            name: Some("Mimi".to_string()),
            color: Some(CatColor::Calico),
            sex: Some(Sex::Female),
            adoption_state: Some(AdoptionState::NotAdopted),
            params: ListParams::page(1, 10).sorted_by("name"),
        };
        let query = filter.to_query();
        assert!(query.contains(&("name".to_string(), "Mimi".to_string())));
        assert!(query.contains(&("color".to_string(), "calico".to_string())));
        assert!(query.contains(&("sex".to_string(), "female".to_string())));
        assert!(query.contains(&("adoptionState".to_string(), "NOT_ADOPTED".to_string())));
        assert!(query.contains(&("sortBy".to_string(), "name".to_string())));
    }
}
