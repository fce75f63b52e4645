//! Frontend Models
//!
//! Data structures matching backend payloads. All records are owned by
//! the backend; this side only reads them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::i18n::Lang;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x600?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectType {
    ForSale,
    ForRent,
    Sold,
}

/// Per-language localizable fields of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectText {
    pub title: Option<String>,
    pub location: Option<String>,
    pub short_desc: Option<String>,
    pub full_desc: Option<String>,
    pub features: Option<Vec<String>>,
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub status: ProjectStatus,
    pub featured: bool,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub price: f64,
    pub price_per_month: Option<f64>,
    pub currency: String,
    pub badge: Option<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub area_unit: Option<String>,
    pub main_image: Option<String>,
    pub images: Vec<String>,
    /// Language code -> translated fields; the active language entry
    /// takes precedence over the base fields below
    pub translations: HashMap<String, ProjectText>,
    // Base fallback fields for records lacking a translation entry
    pub title: Option<String>,
    pub location: Option<String>,
    pub short_desc: Option<String>,
    pub full_desc: Option<String>,
    pub features: Option<Vec<String>>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: String::new(),
            status: ProjectStatus::Active,
            featured: false,
            project_type: ProjectType::ForSale,
            price: 0.0,
            price_per_month: None,
            currency: "ILS".to_string(),
            badge: None,
            bedrooms: 0,
            bathrooms: 0,
            area: 0.0,
            area_unit: None,
            main_image: None,
            images: Vec::new(),
            translations: HashMap::new(),
            title: None,
            location: None,
            short_desc: None,
            full_desc: None,
            features: None,
        }
    }
}

/// Localizable text fields addressable through `Project::text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Location,
    ShortDesc,
    FullDesc,
}

impl Project {
    /// Resolve a localized field: the translation entry for `lang` wins,
    /// the base field is the fallback, absence at every level is `None`.
    pub fn text(&self, field: TextField, lang: Lang) -> Option<&str> {
        let translated = self.translations.get(lang.code()).and_then(|t| match field {
            TextField::Title => t.title.as_deref(),
            TextField::Location => t.location.as_deref(),
            TextField::ShortDesc => t.short_desc.as_deref(),
            TextField::FullDesc => t.full_desc.as_deref(),
        });
        translated.or(match field {
            TextField::Title => self.title.as_deref(),
            TextField::Location => self.location.as_deref(),
            TextField::ShortDesc => self.short_desc.as_deref(),
            TextField::FullDesc => self.full_desc.as_deref(),
        })
    }

    /// Localized feature list with the same precedence as `text`
    pub fn feature_list(&self, lang: Lang) -> &[String] {
        self.translations
            .get(lang.code())
            .and_then(|t| t.features.as_deref())
            .or(self.features.as_deref())
            .unwrap_or(&[])
    }

    /// First displayable image for cards
    pub fn cover_image(&self) -> &str {
        self.main_image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Gallery image set: main image first, duplicates removed,
    /// placeholder when nothing usable remains
    pub fn gallery_images(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let candidates = self.main_image.iter().chain(self.images.iter());
        for img in candidates {
            let img = img.trim();
            if !img.is_empty() && !seen.iter().any(|s| s == img) {
                seen.push(img.to_string());
            }
        }
        if seen.is_empty() {
            seen.push(PLACEHOLDER_IMAGE.to_string());
        }
        seen
    }

    /// Currency symbol for the price label
    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "ILS" => "₪",
            "USD" => "$",
            _ => "€",
        }
    }

    /// Display price: monthly rent when present, else sale price.
    /// `None` when neither is a positive amount.
    pub fn price_label(&self) -> Option<String> {
        if let Some(monthly) = self.price_per_month.filter(|m| *m > 0.0) {
            return Some(format!("{}{}/mo", self.currency_symbol(), group_thousands(monthly)));
        }
        if self.price > 0.0 {
            return Some(format!("{}{}", self.currency_symbol(), group_thousands(self.price)));
        }
        None
    }
}

fn group_thousands(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    out
}

/// List payloads may arrive bare or wrapped in an object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectListPayload {
    Wrapped { projects: Vec<Project> },
    Bare(Vec<Project>),
}

impl ProjectListPayload {
    pub fn into_projects(self) -> Vec<Project> {
        match self {
            ProjectListPayload::Wrapped { projects } => projects,
            ProjectListPayload::Bare(projects) => projects,
        }
    }
}

/// Service data structure (localized by the backend per `lang`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: String,
    pub text: String,
    pub author: String,
    pub location: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub quote: Option<String>,
    pub image: Option<String>,
    pub license_number: Option<String>,
}

impl TeamMember {
    /// Avatar fallback initials, at most two letters
    pub fn initials(&self) -> String {
        let letters: String = self
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        if letters.is_empty() {
            "TM".to_string()
        } else {
            letters.to_uppercase()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub duration: Option<String>,
    pub instructor: Option<String>,
    pub level: Option<String>,
    pub price: f64,
    pub currency: String,
}

/// Lead submitted from the public contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub inquiry_type: String,
    pub message: String,
}

/// Lead as seen in the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lead {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub inquiry_type: String,
    pub message: String,
    pub status: String,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadStats {
    pub total: u32,
    pub new: u32,
    pub contacted: u32,
    pub closed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with(translations: &[(&str, ProjectText)], title: Option<&str>) -> Project {
        Project {
            id: "p1".to_string(),
            translations: translations
                .iter()
                .map(|(code, text)| (code.to_string(), text.clone()))
                .collect(),
            title: title.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_translation_takes_precedence_over_base() {
        let project = project_with(
            &[("he", ProjectText { title: Some("וילה".into()), ..Default::default() })],
            Some("Villa"),
        );
        assert_eq!(project.text(TextField::Title, Lang::He), Some("וילה"));
        assert_eq!(project.text(TextField::Title, Lang::En), Some("Villa"));
    }

    #[test]
    fn test_missing_language_falls_back_to_base() {
        // translations: { en: { title: "Villa" } }, requested ar, no ar key
        let project = project_with(
            &[("en", ProjectText { title: Some("Villa".into()), ..Default::default() })],
            Some("Base Villa"),
        );
        assert_eq!(project.text(TextField::Title, Lang::Ar), Some("Base Villa"));
    }

    #[test]
    fn test_absence_at_every_level_is_none_not_panic() {
        let empty = Project::default();
        for field in [TextField::Title, TextField::Location, TextField::ShortDesc, TextField::FullDesc] {
            for lang in Lang::ALL {
                assert_eq!(empty.text(field, lang), None);
            }
        }
        // Translation entry present but field absent inside it
        let partial = project_with(&[("ar", ProjectText::default())], None);
        assert_eq!(partial.text(TextField::Title, Lang::Ar), None);
        assert!(partial.feature_list(Lang::Ar).is_empty());
    }

    #[test]
    fn test_gallery_dedups_and_keeps_main_first() {
        let project = Project {
            main_image: Some("a.jpg".into()),
            images: vec!["b.jpg".into(), "a.jpg".into(), " ".into(), "c.jpg".into()],
            ..Default::default()
        };
        assert_eq!(project.gallery_images(), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_gallery_placeholder_when_empty() {
        assert_eq!(Project::default().gallery_images(), vec![PLACEHOLDER_IMAGE]);
    }

    #[test]
    fn test_price_label_prefers_monthly() {
        let mut project = Project {
            price: 1_200_000.0,
            ..Default::default()
        };
        assert_eq!(project.price_label().as_deref(), Some("₪1,200,000"));

        project.price_per_month = Some(4500.0);
        assert_eq!(project.price_label().as_deref(), Some("₪4,500/mo"));

        project.price_per_month = None;
        project.price = 0.0;
        assert_eq!(project.price_label(), None);
    }

    #[test]
    fn test_list_payload_accepts_bare_and_wrapped() {
        let bare: ProjectListPayload = serde_json::from_str(r#"[{"id":"p1"}]"#).unwrap();
        assert_eq!(bare.into_projects()[0].id, "p1");

        let wrapped: ProjectListPayload =
            serde_json::from_str(r#"{"projects":[{"id":"p2"}]}"#).unwrap();
        assert_eq!(wrapped.into_projects()[0].id, "p2");
    }

    #[test]
    fn test_project_decodes_with_sparse_payload() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p3","type":"forRent","status":"active","pricePerMonth":3000}"#,
        )
        .unwrap();
        assert_eq!(project.project_type, ProjectType::ForRent);
        assert_eq!(project.price_per_month, Some(3000.0));
    }

    #[test]
    fn test_team_member_initials() {
        let member = TeamMember { name: "dana levi cohen".into(), ..Default::default() };
        assert_eq!(member.initials(), "DL");
        assert_eq!(TeamMember::default().initials(), "TM");
    }

    use proptest::prelude::*;

    fn opt_text() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[a-zא-ת ]{0,8}")
    }

    fn project_text_strategy() -> impl Strategy<Value = ProjectText> {
        (
            opt_text(),
            opt_text(),
            opt_text(),
            opt_text(),
            prop::option::of(prop::collection::vec("[a-z]{1,5}", 0..3)),
        )
            .prop_map(|(title, location, short_desc, full_desc, features)| ProjectText {
                title,
                location,
                short_desc,
                full_desc,
                features,
            })
    }

    fn lang_strategy() -> impl Strategy<Value = Lang> {
        prop_oneof![Just(Lang::En), Just(Lang::He), Just(Lang::Ar)]
    }

    proptest! {
        #[test]
        fn prop_text_is_total_over_partial_records(
            translations in prop::collection::hash_map(
                prop_oneof![
                    Just("en".to_string()),
                    Just("he".to_string()),
                    Just("ar".to_string()),
                    Just("xx".to_string()),
                ],
                project_text_strategy(),
                0..4,
            ),
            base_title in opt_text(),
            lang in lang_strategy(),
        ) {
            let project = Project {
                translations,
                title: base_title.clone(),
                ..Default::default()
            };

            // Total over every field/language combination
            for field in [TextField::Title, TextField::Location, TextField::ShortDesc, TextField::FullDesc] {
                let _ = project.text(field, lang);
            }
            let _ = project.feature_list(lang);

            // Precedence: a populated translation entry wins, the base
            // field fills in, absence everywhere stays None
            let translated = project.translations.get(lang.code()).and_then(|t| t.title.clone());
            let got = project.text(TextField::Title, lang).map(str::to_owned);
            match translated {
                Some(expected) => prop_assert_eq!(got, Some(expected)),
                None => prop_assert_eq!(got, base_title),
            }
        }
    }
}
