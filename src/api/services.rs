//! Service Endpoints

use super::{get_json, ApiError};
use crate::i18n::Lang;
use crate::models::Service;

/// `GET /services?lang=`
pub async fn fetch_services(lang: Lang) -> Result<Vec<Service>, ApiError> {
    get_json("/services", &[("lang", lang.code().to_string())], None).await
}
