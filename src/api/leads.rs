//! Lead Endpoints
//!
//! Public submit plus the admin dashboard surface. Admin responses
//! wrap their payload in a `data` envelope.

use serde::Deserialize;

use super::{delete, get_json, patch_json, post_json, ApiError};
use crate::models::{Lead, LeadForm, LeadStats};

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

/// Admin list filters; `all` buckets are omitted from the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilters {
    pub view: Option<String>,
    pub status: Option<String>,
    pub inquiry_type: Option<String>,
}

impl LeadFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(view) = &self.view {
            pairs.push(("view", view.clone()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| *s != "all") {
            pairs.push(("status", status.to_string()));
        }
        if let Some(kind) = self.inquiry_type.as_deref().filter(|s| *s != "all") {
            pairs.push(("inquiryType", kind.to_string()));
        }
        pairs
    }
}

/// `POST /leads` (public contact form)
pub async fn submit_lead(form: &LeadForm) -> Result<(), ApiError> {
    let _: SubmitResponse = post_json("/leads", form, None).await?;
    Ok(())
}

/// `GET /leads/admin/all`
pub async fn fetch_leads(filters: &LeadFilters, token: &str) -> Result<Vec<Lead>, ApiError> {
    let envelope: DataEnvelope<Vec<Lead>> =
        get_json("/leads/admin/all", &filters.query_pairs(), Some(token)).await?;
    Ok(envelope.data)
}

/// `GET /leads/admin/stats`
pub async fn fetch_lead_stats(view: &str, token: &str) -> Result<LeadStats, ApiError> {
    let envelope: DataEnvelope<LeadStats> =
        get_json("/leads/admin/stats", &[("view", view.to_string())], Some(token)).await?;
    Ok(envelope.data)
}

/// `PATCH /leads/admin/{id}/contact`
pub async fn mark_lead_contacted(id: &str, token: &str) -> Result<Lead, ApiError> {
    let envelope: DataEnvelope<Lead> =
        patch_json(&format!("/leads/admin/{id}/contact"), Some(token)).await?;
    Ok(envelope.data)
}

/// `PATCH /leads/admin/{id}/close`
pub async fn close_lead(id: &str, token: &str) -> Result<Lead, ApiError> {
    let envelope: DataEnvelope<Lead> =
        patch_json(&format!("/leads/admin/{id}/close"), Some(token)).await?;
    Ok(envelope.data)
}

/// `DELETE /leads/admin/{id}`
pub async fn delete_lead(id: &str, token: &str) -> Result<(), ApiError> {
    delete(&format!("/leads/admin/{id}"), Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_build_no_params() {
        assert!(LeadFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn test_all_buckets_are_omitted() {
        let filters = LeadFilters {
            view: Some("inbox".into()),
            status: Some("all".into()),
            inquiry_type: Some("all".into()),
        };
        assert_eq!(filters.query_pairs(), vec![("view", "inbox".to_string())]);
    }

    #[test]
    fn test_specific_buckets_are_sent() {
        let filters = LeadFilters {
            view: None,
            status: Some("new".into()),
            inquiry_type: Some("buying".into()),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("status", "new".to_string()), ("inquiryType", "buying".to_string())]
        );
    }
}
