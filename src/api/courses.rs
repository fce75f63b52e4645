//! Course Endpoints

use super::{get_json, ApiError};
use crate::i18n::Lang;
use crate::models::Course;

/// `GET /courses?lang=&limit=`
pub async fn fetch_courses(lang: Lang, limit: Option<u32>) -> Result<Vec<Course>, ApiError> {
    let mut query = vec![("lang", lang.code().to_string())];
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    get_json("/courses", &query, None).await
}
