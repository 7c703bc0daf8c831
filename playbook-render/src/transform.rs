//! The per-file transform: source text in, rewritten source and SVG out.
//!
//! No I/O happens here. The caller decides where (and whether) to write.

use playbook_core::text::slugify_or;
use playbook_core::{derive, extract_metadata, has_marker};

use crate::error::RenderError;
use crate::hero::render_hero;
use crate::page::{EmitOptions, emit_page, is_generated};
use crate::sections::generate_sections;

/// Fallback stem for asset names when neither slug nor title slugify.
const FALLBACK_ASSET_STEM: &str = "post";

/// Why a source was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `export const meta` marker.
    NoMetadataExport,
    /// The marker is present but its literal never closes.
    UnbalancedLiteral,
    /// The source is already a generated page.
    AlreadyExpanded,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMetadataExport => write!(f, "no metadata export"),
            Self::UnbalancedLiteral => write!(f, "unbalanced metadata literal"),
            Self::AlreadyExpanded => write!(f, "already expanded"),
        }
    }
}

/// Everything produced for one post.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// Resolved slug (author's slug, or one computed from the title).
    pub slug: String,
    /// `{slug}.svg`.
    pub asset_file_name: String,
    /// Replacement source for the post file.
    pub rewritten_source: String,
    /// Hero illustration document.
    pub svg: String,
    /// Number of generated sections.
    pub section_count: usize,
}

/// Result of transforming one source.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The source expands to a new page.
    Rewritten(Expansion),
    /// The source was left alone.
    Skipped(SkipReason),
}

/// Expand one post source into a full page plus its hero SVG.
///
/// Sources whose header carries
/// [`GENERATED_MARKER`](crate::page::GENERATED_MARKER) are skipped so a
/// second run over the same tree leaves it unchanged.
///
/// # Errors
///
/// Returns [`RenderError::Metadata`] when the metadata literal exists but
/// cannot be evaluated.
pub fn expand_source(source: &str, options: &EmitOptions) -> Result<Outcome, RenderError> {
    if is_generated(source) {
        return Ok(Outcome::Skipped(SkipReason::AlreadyExpanded));
    }
    if !has_marker(source) {
        return Ok(Outcome::Skipped(SkipReason::NoMetadataExport));
    }
    let Some(mut meta) = extract_metadata(source)? else {
        return Ok(Outcome::Skipped(SkipReason::UnbalancedLiteral));
    };

    let author_slug = meta
        .slug
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| slugify_or(s, FALLBACK_ASSET_STEM));
    let slug = if let Some(slug) = author_slug {
        slug
    } else {
        let computed = slugify_or(&meta.title, FALLBACK_ASSET_STEM);
        meta.slug = Some(computed.clone());
        computed
    };
    let asset_file_name = format!("{slug}.svg");

    let config = derive(&meta);
    let sections = generate_sections(&config);
    let hero = render_hero(&config.topic, &config.keywords);
    let rewritten_source = emit_page(&meta, &sections, &asset_file_name, options)?;

    Ok(Outcome::Rewritten(Expansion {
        slug,
        asset_file_name,
        rewritten_source,
        svg: hero.svg,
        section_count: sections.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::GENERATED_MARKER;

    const POST: &str = r"import cover from './cover.png';

export const meta = {
  title: 'Email Automation Playbook',
  category: 'lifecycle-marketing',
  tags: ['email', 'automation'],
  cover: cover,
};

export default function Post() {
  return <p>draft</p>;
}
";

    fn expand(source: &str) -> Outcome {
        expand_source(source, &EmitOptions::default()).unwrap()
    }

    fn expansion(source: &str) -> Expansion {
        match expand(source) {
            Outcome::Rewritten(expansion) => expansion,
            Outcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn test_expand_post() {
        let out = expansion(POST);
        assert_eq!(out.slug, "email-automation-playbook");
        assert_eq!(out.asset_file_name, "email-automation-playbook.svg");
        assert_eq!(out.section_count, 16);
        assert!(out.rewritten_source.contains(GENERATED_MARKER));
        assert!(
            out.rewritten_source
                .contains("@/assets/playbooks/email-automation-playbook.svg")
        );
        assert!(!out.rewritten_source.contains("draft"));
        assert!(out.svg.starts_with("<svg"));
    }

    #[test]
    fn test_svg_matches_hero_generator() {
        let out = expansion(POST);
        let keywords = [
            "email".to_string(),
            "automation".to_string(),
            "Email Automation".to_string(),
        ];
        assert_eq!(
            out.svg,
            render_hero("Email Automation Playbook", &keywords).svg
        );
    }

    #[test]
    fn test_author_slug_wins() {
        let source = "export const meta = { title: 'Growth Playbook', slug: 'growth' };";
        let out = expansion(source);
        assert_eq!(out.asset_file_name, "growth.svg");
    }

    #[test]
    fn test_slug_is_sanitized() {
        let source = "export const meta = { title: 'X', slug: '../../etc/Passwd' };";
        assert_eq!(expansion(source).asset_file_name, "etc-passwd.svg");
    }

    #[test]
    fn test_unsluggable_title_falls_back() {
        let source = "export const meta = { title: '!!!' };";
        assert_eq!(expansion(source).asset_file_name, "post.svg");
    }

    #[test]
    fn test_computed_slug_lands_in_page_data() {
        let out = expansion(POST);
        assert!(
            out.rewritten_source
                .contains("\"slug\": \"email-automation-playbook\"")
        );
    }

    #[test]
    fn test_skip_without_marker() {
        assert_eq!(
            expand("export default function Page() { return null; }"),
            Outcome::Skipped(SkipReason::NoMetadataExport)
        );
    }

    #[test]
    fn test_skip_unbalanced() {
        assert_eq!(
            expand("export const meta = { title: 'Open'"),
            Outcome::Skipped(SkipReason::UnbalancedLiteral)
        );
    }

    #[test]
    fn test_second_pass_is_skipped() {
        let first = expansion(POST);
        assert_eq!(
            expand(&first.rewritten_source),
            Outcome::Skipped(SkipReason::AlreadyExpanded)
        );
    }

    #[test]
    fn test_marker_in_prose_is_expanded() {
        let source = format!(
            "export const meta = {{ title: 'Release Notes', coverAlt: 'Pages carry {GENERATED_MARKER} at the top.' }};"
        );
        let out = expansion(&source);
        assert_eq!(out.slug, "release-notes");
        assert!(is_generated(&out.rewritten_source));
    }

    #[test]
    fn test_evaluation_failure_is_error() {
        let result = expand_source(
            "export const meta = { title: makeTitle() };",
            &EmitOptions::default(),
        );
        assert!(matches!(result, Err(RenderError::Metadata(_))));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(expand(POST), expand(POST));
    }
}
