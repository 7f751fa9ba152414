pub mod adopter_service;
pub mod adoption_service;
pub mod cat_service;
pub mod cep_service;
pub mod note_service;
pub mod sterilization_service;
pub mod upload_service;

/// Sort direction for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Paging and sorting parameters shared by every list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: usize,
    pub size: usize,
    pub sort_by: Option<String>,
    pub sort_dir: SortDir,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: None,
            sort_dir: SortDir::Asc,
        }
    }
}

impl ListParams {
    pub fn page(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, field: &str) -> Self {
        self.sort_by = Some(field.to_string());
        self
    }

    pub fn descending(mut self) -> Self {
        self.sort_dir = SortDir::Desc;
        self
    }

    /// Query pairs understood by the backend (`page`, `size`, `sortBy`,
    /// `sortDir`). Sort pairs are only sent when a sort field is set.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(field) = &self.sort_by {
            query.push(("sortBy".to_string(), field.clone()));
            query.push(("sortDir".to_string(), self.sort_dir.as_str().to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_sort() {
        let params = ListParams::page(2, 10);
        assert_eq!(
            params.to_query(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_with_sort() {
        let params = ListParams::page(0, 25).sorted_by("name").descending();
        let query = params.to_query();
        assert!(query.contains(&("sortBy".to_string(), "name".to_string())));
        assert!(query.contains(&("sortDir".to_string(), "desc".to_string())));
    }
}
