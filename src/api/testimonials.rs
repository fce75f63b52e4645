//! Testimonial Endpoints

use super::{get_json, ApiError};
use crate::i18n::Lang;
use crate::models::Testimonial;

/// `GET /testimonials?lang=&featured=`
pub async fn fetch_testimonials(lang: Lang, featured_only: bool) -> Result<Vec<Testimonial>, ApiError> {
    let mut query = vec![("lang", lang.code().to_string())];
    if featured_only {
        query.push(("featured", "true".to_string()));
    }
    get_json("/testimonials", &query, None).await
}
