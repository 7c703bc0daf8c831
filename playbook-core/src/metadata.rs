//! Post metadata model and lint checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MetadataError, Severity, ValidationIssue};

/// Keys a metadata literal is expected to use.
pub const KNOWN_KEYS: &[&str] = &[
    "title",
    "slug",
    "category",
    "subCategory",
    "tags",
    "persona",
    "date",
    "updated",
    "cover",
    "coverAlt",
];

/// Metadata harvested from a content source's `meta` export.
///
/// Only `title` is required. `cover` is never carried: the extractor
/// neutralizes it before deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Headline of the post.
    pub title: String,

    /// URL slug, if the author set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Category slug (e.g. `lifecycle-marketing`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Subcategory slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    /// Free-form tags, most important first.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<String>,

    /// Target reader description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,

    /// Publication date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Last update date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Alt text for the cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_alt: Option<String>,
}

fn nullable_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PostMetadata {
    /// Build metadata from a parsed literal.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Invalid`] if the value is not an object,
    /// a field has the wrong type, or `title` is missing or blank.
    pub fn from_value(value: Value) -> Result<Self, MetadataError> {
        if !value.is_object() {
            return Err(MetadataError::Invalid(
                "meta export is not an object".to_string(),
            ));
        }
        let meta: Self = serde_json::from_value(value)?;
        if meta.title.trim().is_empty() {
            return Err(MetadataError::Invalid("title is empty".to_string()));
        }
        Ok(meta)
    }

    /// Parsed publication date, if present and well-formed.
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Parsed update date, if present and well-formed.
    #[must_use]
    pub fn updated_on(&self) -> Option<NaiveDate> {
        self.updated.as_deref().and_then(parse_date)
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Lint a post's metadata.
///
/// `raw` is the parsed literal before deserialization; it is used to report
/// keys the model does not know about. An empty list means clean.
#[must_use]
pub fn lint_metadata(meta: &PostMetadata, raw: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(object) = raw.as_object() {
        for key in object.keys() {
            if KNOWN_KEYS.contains(&key.as_str()) {
                continue;
            }
            let message = suggest_key(key).map_or_else(
                || format!("unknown key \"{key}\""),
                |known| format!("unknown key \"{key}\" (did you mean \"{known}\"?)"),
            );
            issues.push(ValidationIssue {
                field: format!("meta.{key}"),
                message,
                severity: Severity::Warning,
            });
        }
    }

    for (field, value, parsed) in [
        ("meta.date", meta.date.as_deref(), meta.published_on()),
        ("meta.updated", meta.updated.as_deref(), meta.updated_on()),
    ] {
        if let (Some(text), None) = (value, parsed) {
            issues.push(ValidationIssue {
                field: field.to_string(),
                message: format!("expected YYYY-MM-DD, got \"{text}\""),
                severity: Severity::Warning,
            });
        }
    }

    if let (Some(published), Some(updated)) = (meta.published_on(), meta.updated_on()) {
        if updated < published {
            issues.push(ValidationIssue {
                field: "meta.updated".to_string(),
                message: format!("update date {updated} precedes publication date {published}"),
                severity: Severity::Warning,
            });
        }
    }

    if meta.tags.iter().all(|t| t.trim().is_empty()) {
        issues.push(ValidationIssue {
            field: "meta.tags".to_string(),
            message: "no tags; keywords will fall back to derived defaults".to_string(),
            severity: Severity::Warning,
        });
    }

    if meta.tags.iter().any(|t| !t.is_empty() && t.trim().is_empty()) {
        issues.push(ValidationIssue {
            field: "meta.tags".to_string(),
            message: "blank tag entries are ignored".to_string(),
            severity: Severity::Warning,
        });
    }

    issues
}

/// Suggest a known key for a misspelled one.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_key(input: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|&k| (k, strsim::damerau_levenshtein(input, k)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_camel_case() {
        let meta = PostMetadata::from_value(json!({
            "title": "Email Automation Playbook",
            "subCategory": "nurture-flows",
            "coverAlt": "Envelope",
            "tags": ["email"]
        }))
        .unwrap();
        assert_eq!(meta.sub_category.as_deref(), Some("nurture-flows"));
        assert_eq!(meta.cover_alt.as_deref(), Some("Envelope"));
        assert_eq!(meta.tags, vec!["email"]);
    }

    #[test]
    fn test_from_value_ignores_cover_and_unknown_keys() {
        let meta = PostMetadata::from_value(json!({
            "title": "A",
            "cover": null,
            "author": "Sam"
        }))
        .unwrap();
        assert_eq!(meta.title, "A");
    }

    #[test]
    fn test_from_value_null_tags() {
        let meta = PostMetadata::from_value(json!({"title": "A", "tags": null})).unwrap();
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_from_value_requires_title() {
        assert!(PostMetadata::from_value(json!({"slug": "x"})).is_err());
        assert!(PostMetadata::from_value(json!({"title": "   "})).is_err());
    }

    #[test]
    fn test_from_value_rejects_wrong_types() {
        assert!(PostMetadata::from_value(json!({"title": "A", "tags": "seo"})).is_err());
        assert!(PostMetadata::from_value(json!(["title"])).is_err());
    }

    #[test]
    fn test_dates() {
        let meta = PostMetadata {
            title: "A".to_string(),
            date: Some("2024-03-01".to_string()),
            updated: Some("March 2".to_string()),
            ..PostMetadata::default()
        };
        assert_eq!(
            meta.published_on(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(meta.updated_on(), None);
    }

    #[test]
    fn test_lint_unknown_key_with_suggestion() {
        let raw = json!({"title": "A", "tgas": ["x"], "tags": ["x"]});
        let meta = PostMetadata::from_value(raw.clone()).unwrap();
        let issues = lint_metadata(&meta, &raw);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("did you mean \"tags\""));
    }

    #[test]
    fn test_lint_bad_dates() {
        let raw = json!({
            "title": "A",
            "tags": ["x"],
            "date": "2024-05-10",
            "updated": "2024-01-01"
        });
        let meta = PostMetadata::from_value(raw.clone()).unwrap();
        let issues = lint_metadata(&meta, &raw);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("precedes"));

        let raw = json!({"title": "A", "tags": ["x"], "date": "yesterday"});
        let meta = PostMetadata::from_value(raw.clone()).unwrap();
        let issues = lint_metadata(&meta, &raw);
        assert_eq!(issues[0].field, "meta.date");
    }

    #[test]
    fn test_lint_missing_tags() {
        let raw = json!({"title": "A"});
        let meta = PostMetadata::from_value(raw.clone()).unwrap();
        let issues = lint_metadata(&meta, &raw);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "meta.tags");
    }

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("subcategory"), Some("subCategory"));
        assert_eq!(suggest_key("completely-unrelated"), None);
    }
}
