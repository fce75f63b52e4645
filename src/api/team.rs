//! Team Endpoints

use super::{get_json, ApiError};
use crate::i18n::Lang;
use crate::models::TeamMember;

/// `GET /team?lang=&featured=`
pub async fn fetch_team(lang: Lang, featured_only: bool) -> Result<Vec<TeamMember>, ApiError> {
    let mut query = vec![("lang", lang.code().to_string())];
    if featured_only {
        query.push(("featured", "true".to_string()));
    }
    get_json("/team", &query, None).await
}
