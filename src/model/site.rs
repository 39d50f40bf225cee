//! Static site data: the home, about and portfolio sections.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::RichText;
use crate::error::{Error, Result};

/// All content of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    /// Home page
    pub home: HomeSection,

    /// About page
    pub about: AboutSection,

    /// Portfolio gallery
    pub portfolio: PortfolioSection,
}

impl SiteData {
    /// Parse site data from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: SiteData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check the rules serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.portfolio.items {
            if !slug_regex().is_match(&item.slug) {
                return Err(Error::InvalidData(format!(
                    "invalid portfolio slug '{}'",
                    item.slug
                )));
            }
            if !seen.insert(item.slug.as_str()) {
                return Err(Error::InvalidData(format!(
                    "duplicate portfolio slug '{}'",
                    item.slug
                )));
            }
            if !color_regex().is_match(&item.theme) {
                return Err(Error::InvalidData(format!(
                    "invalid theme colour '{}' for '{}'",
                    item.theme, item.slug
                )));
            }
        }
        Ok(())
    }

    /// Find a portfolio item by slug.
    pub fn portfolio_item(&self, slug: &str) -> Option<&PortfolioItem> {
        self.portfolio.items.iter().find(|i| i.slug == slug)
    }
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
}

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap())
}

/// SEO metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seo {
    /// Document title
    pub title: String,

    /// Meta description
    pub description: String,
}

/// An image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    /// Alternative text
    pub alt: String,

    /// Source URL; empty means "no image yet"
    pub src: String,

    /// Intrinsic width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Intrinsic height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Image {
    /// Check if the image has a source.
    pub fn has_source(&self) -> bool {
        !self.src.trim().is_empty()
    }
}

/// Home page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSection {
    /// Site owner's name
    pub title: String,
    /// Hero headline
    pub hero_title: String,
    /// Hero paragraph(s)
    pub hero_description: RichText,
    /// Portrait
    pub image: Image,
    /// Site-wide SEO defaults
    pub seo: Seo,
}

/// A completed degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub university: String,
    pub year: String,
}

/// A point in time stored as `{ "timestamp": <epoch millis> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Timestamp {
    /// Wrap a date-time.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }
}

/// One job in the work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkHistoryItem {
    pub company_name: String,
    pub job_title: String,
    /// Human-readable period, e.g. "2021 - Presente"
    pub duration: String,
    pub from: Timestamp,
    /// End of the job; `None` means it is ongoing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Timestamp>,
    pub description: RichText,
}

impl WorkHistoryItem {
    /// Check if the job is ongoing.
    pub fn is_current(&self) -> bool {
        self.to.is_none()
    }

    /// Whole months between start and end (or `now` for ongoing jobs).
    pub fn months(&self, now: DateTime<Utc>) -> i64 {
        let end = self.to.map(|t| t.timestamp).unwrap_or(now);
        (end - self.from.timestamp).num_days().max(0) / 30
    }
}

/// About page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub description: RichText,
    pub education_title: String,
    pub education_text: String,
    #[serde(default)]
    pub education_degrees: Vec<Degree>,
    pub work_history_title: String,
    #[serde(default)]
    pub work_history_text: Vec<String>,
    #[serde(default)]
    pub work_history_items: Vec<WorkHistoryItem>,
}

/// One project in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// URL segment, unique within the portfolio
    pub slug: String,
    pub title: String,
    /// Accent colour as `#RRGGBB`
    pub theme: String,
    pub cover_image: Image,
    #[serde(default)]
    pub gallery: Vec<Image>,
    pub description: RichText,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Portfolio page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSection {
    pub title: String,
    pub description: RichText,
    #[serde(default)]
    pub items: Vec<PortfolioItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(slug: &str, theme: &str) -> PortfolioItem {
        PortfolioItem {
            slug: slug.to_string(),
            title: "Project".to_string(),
            theme: theme.to_string(),
            cover_image: Image::default(),
            gallery: Vec::new(),
            description: RichText::paragraph("desc"),
            categories: Vec::new(),
        }
    }

    fn site(items: Vec<PortfolioItem>) -> SiteData {
        let mut data = crate::data::builtin().unwrap();
        data.portfolio.items = items;
        data
    }

    #[test]
    fn test_validate_accepts_builtin() {
        assert!(crate::data::builtin().unwrap().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_slug() {
        let err = site(vec![item("Project 1", "#6366F1")]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_slug() {
        let data = site(vec![item("a", "#6366F1"), item("a", "#10B981")]);
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_bad_colour() {
        let err = site(vec![item("a", "blue")]).validate().unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_timestamp_millis() {
        let ts: Timestamp = serde_json::from_str(r#"{"timestamp":1609459200000}"#).unwrap();
        assert_eq!(ts.timestamp, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_work_item_months() {
        let from = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let job = WorkHistoryItem {
            company_name: "INTA".to_string(),
            job_title: "Dev".to_string(),
            duration: "2021 - Presente".to_string(),
            from: Timestamp::new(from),
            to: None,
            description: RichText::default(),
        };
        assert!(job.is_current());
        assert_eq!(job.months(now), 12);
    }
}
