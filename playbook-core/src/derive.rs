//! Generation config derivation.
//!
//! Turns sparse post metadata into the richer context the section and hero
//! generators interpolate. Pure and deterministic: the same metadata always
//! yields the same config.

use serde::Serialize;

use crate::metadata::PostMetadata;
use crate::text::{strip_word, title_case};

/// Number of keywords every config carries.
pub const KEYWORD_COUNT: usize = 3;

/// Pillar used when neither tags nor category are available.
pub const FALLBACK_PILLAR: &str = "Growth Marketing";

/// Padding keywords for posts too sparse to fill three slots.
const FALLBACK_KEYWORDS: &[&str] = &[
    "growth strategy",
    "marketing operations",
    "customer acquisition",
    "revenue analytics",
];

/// Context for generating one playbook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Trimmed post title.
    pub topic: String,
    /// Primary theme of the post.
    pub pillar: String,
    /// Exactly three distinct, non-empty keywords.
    pub keywords: [String; KEYWORD_COUNT],
    /// Who the page is written for.
    pub audience: String,
    /// Three concrete situations the playbook applies to.
    pub use_cases: [String; KEYWORD_COUNT],
    /// What sets the recommended approach apart.
    pub differentiator: String,
    /// Planning horizon used throughout the copy.
    pub timeframe: String,
    /// Outcome claim used in summaries.
    pub proof_point: String,
    /// Headline statistic for the hero area.
    pub hero_stat: String,
}

/// Derive the generation config for a post.
#[must_use]
pub fn derive(meta: &PostMetadata) -> GenerationConfig {
    let topic = meta.title.trim().to_string();
    let pillar = derive_pillar(meta);
    let keywords = derive_keywords(meta);
    let [k1, k2, k3] = &keywords;

    let audience = non_blank(meta.persona.as_deref()).map_or_else(
        || format!("{pillar} leaders who need a repeatable growth engine"),
        str::to_string,
    );

    let use_cases = [
        format!("launching {k1} programs without adding headcount"),
        format!("scaling {k2} across segments and regions"),
        format!("proving {k3} impact to finance and leadership"),
    ];

    GenerationConfig {
        differentiator: format!(
            "a single operating cadence that ties {k1} and {k2} directly to pipeline"
        ),
        timeframe: "the next 90 days".to_string(),
        proof_point: format!(
            "teams that operationalize {k1} typically see compounding gains within two quarters"
        ),
        hero_stat: format!("3x faster {} iteration", pillar.to_lowercase()),
        topic,
        pillar,
        keywords,
        audience,
        use_cases,
    }
}

/// Pillar: first tag, else title-cased category, else the fallback.
#[must_use]
pub fn derive_pillar(meta: &PostMetadata) -> String {
    meta.tags
        .iter()
        .find_map(|t| non_blank(Some(t)))
        .map(str::to_string)
        .or_else(|| {
            non_blank(meta.category.as_deref())
                .map(title_case)
                .filter(|c| !c.is_empty())
        })
        .unwrap_or_else(|| FALLBACK_PILLAR.to_string())
}

/// Select exactly three keywords for a post.
///
/// Tags come first. When there are fewer than three, the topic without the
/// word "Playbook", the pillar and the title-cased subcategory are appended
/// in that order. Duplicates are dropped case-insensitively, keeping the
/// first spelling, and any remaining gap is filled from a fixed list.
#[must_use]
pub fn derive_keywords(meta: &PostMetadata) -> [String; KEYWORD_COUNT] {
    let mut candidates: Vec<String> = meta
        .tags
        .iter()
        .filter_map(|t| non_blank(Some(t)))
        .map(str::to_string)
        .collect();

    if candidates.len() < KEYWORD_COUNT {
        candidates.push(strip_word(meta.title.trim(), "Playbook"));
        candidates.push(derive_pillar(meta));
        if let Some(sub) = non_blank(meta.sub_category.as_deref()) {
            candidates.push(title_case(sub));
        }
    }

    let mut keywords: Vec<String> = Vec::with_capacity(KEYWORD_COUNT);
    let fallbacks = FALLBACK_KEYWORDS.iter().map(|k| (*k).to_string());
    for candidate in candidates.into_iter().chain(fallbacks) {
        if keywords.len() == KEYWORD_COUNT {
            break;
        }
        let candidate = candidate.trim().to_string();
        if candidate.is_empty() || keywords.iter().any(|k| k.eq_ignore_ascii_case(&candidate)) {
            continue;
        }
        keywords.push(candidate);
    }

    // FALLBACK_KEYWORDS is longer than KEYWORD_COUNT and pairwise distinct, so
    // at most KEYWORD_COUNT - 1 of them can collide with earlier picks.
    let mut picked = keywords.into_iter();
    std::array::from_fn(|_| picked.next().unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
