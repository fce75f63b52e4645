//! Project Endpoints
//!
//! The list query is a pure value of `(language, filter)`; the effect
//! layer re-issues a request only when that value changes.

use serde::{Deserialize, Serialize};

use super::{get_json, ApiError};
use crate::i18n::Lang;
use crate::models::{Project, ProjectListPayload};

/// Project type filter. `All` omits the `type` query parameter
/// entirely rather than sending a literal "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectFilter {
    #[default]
    All,
    ForSale,
    ForRent,
    Sold,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::ForSale,
        ProjectFilter::ForRent,
        ProjectFilter::Sold,
    ];

    pub fn as_param(self) -> Option<&'static str> {
        match self {
            ProjectFilter::All => None,
            ProjectFilter::ForSale => Some("forSale"),
            ProjectFilter::ForRent => Some("forRent"),
            ProjectFilter::Sold => Some("sold"),
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "all" => Some(ProjectFilter::All),
            "forSale" => Some(ProjectFilter::ForSale),
            "forRent" => Some(ProjectFilter::ForRent),
            "sold" => Some(ProjectFilter::Sold),
            _ => None,
        }
    }

    /// Catalog key for the tab label
    pub fn label_key(self) -> &'static str {
        match self {
            ProjectFilter::All => "projects.filters.all",
            ProjectFilter::ForSale => "projects.filters.forSale",
            ProjectFilter::ForRent => "projects.filters.forRent",
            ProjectFilter::Sold => "projects.filters.sold",
        }
    }
}

/// Desired list request as a plain value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectQuery {
    pub lang: Lang,
    pub filter: ProjectFilter,
    pub featured_only: bool,
}

impl ProjectQuery {
    pub fn new(lang: Lang, filter: ProjectFilter) -> Self {
        Self { lang, filter, featured_only: false }
    }

    pub fn featured(lang: Lang, filter: ProjectFilter) -> Self {
        Self { lang, filter, featured_only: true }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("lang", self.lang.code().to_string())];
        if let Some(kind) = self.filter.as_param() {
            pairs.push(("type", kind.to_string()));
        }
        if self.featured_only {
            pairs.push(("featured", "true".to_string()));
        }
        pairs
    }
}

/// `GET /projects?lang=&type=&featured=`
pub async fn fetch_projects(query: ProjectQuery) -> Result<Vec<Project>, ApiError> {
    let payload: ProjectListPayload = get_json("/projects", &query.query_pairs(), None).await?;
    Ok(payload.into_projects())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_omits_type_param() {
        let pairs = ProjectQuery::new(Lang::En, ProjectFilter::All).query_pairs();
        assert_eq!(pairs, vec![("lang", "en".to_string())]);
    }

    #[test]
    fn test_typed_filter_includes_param() {
        let pairs = ProjectQuery::new(Lang::He, ProjectFilter::ForRent).query_pairs();
        assert_eq!(
            pairs,
            vec![("lang", "he".to_string()), ("type", "forRent".to_string())]
        );
    }

    #[test]
    fn test_featured_flag_appended_only_when_set() {
        let pairs = ProjectQuery::featured(Lang::Ar, ProjectFilter::Sold).query_pairs();
        assert!(pairs.contains(&("featured", "true".to_string())));
        let plain = ProjectQuery::new(Lang::Ar, ProjectFilter::Sold).query_pairs();
        assert!(!plain.iter().any(|(k, _)| *k == "featured"));
    }

    #[test]
    fn test_filter_params_round_trip() {
        for filter in ProjectFilter::ALL {
            let param = filter.as_param().unwrap_or("all");
            assert_eq!(ProjectFilter::from_param(param), Some(filter));
        }
        assert_eq!(ProjectFilter::from_param("bogus"), None);
    }

    #[test]
    fn test_identical_inputs_yield_equal_queries() {
        // Memo equality over this value is what de-duplicates refetches
        let a = ProjectQuery::new(Lang::En, ProjectFilter::ForSale);
        let b = ProjectQuery::new(Lang::En, ProjectFilter::ForSale);
        assert_eq!(a, b);
        assert_ne!(a, ProjectQuery::new(Lang::He, ProjectFilter::ForSale));
    }
}
