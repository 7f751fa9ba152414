use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::Note;

/// Loads every note attached to a cat, newest first (backend order)
pub async fn list_notes(client: &ApiClient, cat_id: i64) -> Result<Vec<Note>, AppError> {
    let query = vec![("catId".to_string(), cat_id.to_string())];
    client.get_json("/notes", &query).await
}

/// Attaches a note to a cat's record
pub async fn create_note(client: &ApiClient, note: &Note) -> Result<Note, AppError> {
    note.validate()?;
    client.post_json("/notes", note).await
}

/// Removes a note
pub async fn delete_note(client: &ApiClient, id: i64) -> Result<(), AppError> {
    client.delete(&format!("/notes/{}", id)).await
}
