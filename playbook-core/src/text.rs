//! Slug and casing helpers.

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 64;

/// Fallback slug for section titles that reduce to nothing.
pub const DEFAULT_SLUG: &str = "section";

/// Slugify text into `[a-z0-9-]`, falling back to `"section"`.
///
/// # Rules
/// 1. Lowercase the entire string
/// 2. Replace each run of characters outside `[a-z0-9]` with a single `-`
/// 3. Trim leading/trailing `-`
/// 4. Cap at 64 characters (and trim a `-` the cut exposes)
/// 5. If the result is empty, use the fallback
#[must_use]
pub fn slugify(text: &str) -> String {
    slugify_or(text, DEFAULT_SLUG)
}

/// Slugify text, using `fallback` when nothing slug-worthy remains.
#[must_use]
pub fn slugify_or(text: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    // ASCII only from here, so byte length == char count
    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.to_string()
    }
}

/// Title-case a slug or phrase: `lifecycle-marketing` → `Lifecycle Marketing`.
///
/// Dashes and underscores become spaces; each word's first letter is
/// uppercased and the rest left as written.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove a whole word from a phrase, case-insensitively, collapsing spaces.
#[must_use]
pub fn strip_word(text: &str, word: &str) -> String {
    text.split_whitespace()
        .filter(|w| !w.eq_ignore_ascii_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Search Intent"), "search-intent");
    }

    #[test]
    fn test_slugify_runs_collapse() {
        assert_eq!(slugify("SERP -- Intent & Demand!"), "serp-intent-demand");
    }

    #[test]
    fn test_slugify_leading_trailing() {
        assert_eq!(slugify("  --Roadmap--  "), "roadmap");
    }

    #[test]
    fn test_slugify_non_ascii() {
        assert_eq!(slugify("Café Growth"), "caf-growth");
    }

    #[test]
    fn test_slugify_empty_fallback() {
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("!!!"), "section");
        assert_eq!(slugify_or("???", "post"), "post");
    }

    #[test]
    fn test_slugify_cap() {
        let long = "word ".repeat(40);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
        assert!(slug.starts_with("word-word"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("lifecycle-marketing"), "Lifecycle Marketing");
        assert_eq!(title_case("paid_social ads"), "Paid Social Ads");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_strip_word() {
        assert_eq!(
            strip_word("Email Automation Playbook", "playbook"),
            "Email Automation"
        );
        assert_eq!(strip_word("Playbook", "Playbook"), "");
        assert_eq!(strip_word("Playbooks Galore", "Playbook"), "Playbooks Galore");
    }
}
