use serde::{Deserialize, Serialize};

/// Backend pagination envelope.
///
/// Whatever the backend reports here is taken as-is; the client never
/// recomputes `total_pages` from `total_elements`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub size: usize,
    pub number: usize,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Initial state before the first load
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size: 0,
            number: 0,
            first: true,
            last: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialization() {
        // First page of 25 records with rows=10
        let json = r#"{
            "content": ["a", "b"],
            "totalElements": 25,
            "totalPages": 3,
            "size": 10,
            "number": 0,
            "first": true,
            "last": false
        }"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<String> = Page::empty();
        assert!(page.is_empty());
        assert!(page.last);
    }
}
