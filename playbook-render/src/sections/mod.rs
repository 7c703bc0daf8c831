//! Templated section generation.
//!
//! A playbook page is a fixed sequence of sixteen sections. Each definition
//! in [`catalog::SECTIONS`] is instantiated against one
//! [`GenerationConfig`] by single-pass `${name}` substitution. Prose is
//! deterministic given the same config.

pub mod catalog;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use playbook_core::GenerationConfig;
use playbook_core::text::slugify;

use catalog::{CLOSING_CLAUSES, SECTIONS, SectionTemplate};

/// Regex for matching `${name}` placeholders.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("valid regex"));

/// One viewpoint on a section's theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Perspective {
    /// Short heading.
    pub title: String,
    /// Paragraph body.
    pub body: String,
}

/// One concrete action inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Play {
    /// Short heading.
    pub title: String,
    /// What to do and how.
    pub detail: String,
}

/// A generated content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// `slugify(title)-index`, unique within a page.
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Lead paragraph.
    pub summary: String,
    /// Two perspectives.
    pub perspectives: Vec<Perspective>,
    /// Three plays.
    pub plays: Vec<Play>,
}

/// Generate every section for a config, in page order.
#[must_use]
pub fn generate_sections(config: &GenerationConfig) -> Vec<Section> {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(index, template)| instantiate(index, template, config))
        .collect()
}

fn instantiate(index: usize, template: &SectionTemplate, config: &GenerationConfig) -> Section {
    let title = render_template(template.title, config);
    let clause = |offset: usize| CLOSING_CLAUSES[(index + offset) % CLOSING_CLAUSES.len()];

    let perspectives = template
        .perspectives
        .iter()
        .enumerate()
        .map(|(i, (heading, body))| Perspective {
            title: render_template(heading, config),
            body: render_with_clause(body, clause(i + 1), config),
        })
        .collect();

    let plays = template
        .plays
        .iter()
        .enumerate()
        .map(|(i, (heading, detail))| Play {
            title: render_template(heading, config),
            detail: render_with_clause(detail, clause(i), config),
        })
        .collect();

    Section {
        id: format!("{}-{index}", slugify(&title)),
        summary: render_with_clause(template.summary, clause(0), config),
        title,
        perspectives,
        plays,
    }
}

fn render_with_clause(template: &str, clause: &str, config: &GenerationConfig) -> String {
    format!(
        "{} {}",
        render_template(template, config),
        render_template(clause, config)
    )
}

/// Substitute `${name}` placeholders from a config.
///
/// Unknown names are left in place so template typos show up in output
/// rather than silently vanishing. No recursive evaluation: substituted
/// values are not re-scanned.
#[must_use]
pub fn render_template(template: &str, config: &GenerationConfig) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures| {
            lookup(&caps[1], config).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn lookup(name: &str, config: &GenerationConfig) -> Option<String> {
    let [k1, k2, k3] = &config.keywords;
    let [u1, u2, u3] = &config.use_cases;
    let value = match name {
        "topic" => &config.topic,
        "pillar" => &config.pillar,
        "keyword1" => k1,
        "keyword2" => k2,
        "keyword3" => k3,
        "keywords" => return Some(config.keywords.join(", ")),
        "audience" => &config.audience,
        "useCase1" => u1,
        "useCase2" => u2,
        "useCase3" => u3,
        "differentiator" => &config.differentiator,
        "timeframe" => &config.timeframe,
        "proofPoint" => &config.proof_point,
        "heroStat" => &config.hero_stat,
        _ => return None,
    };
    Some(value.clone())
}
