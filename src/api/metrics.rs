//! Metrics Endpoints

use crate::error::ApiError;
use crate::models::CountSnapshot;

use super::get_json;

pub async fn fetch_counts(path: &str) -> Result<CountSnapshot, ApiError> {
    get_json(path).await
}
