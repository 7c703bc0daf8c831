//! Page source emission.
//!
//! Assembles the generated header, imports, the inlined `playbook` data
//! literal and the page component into one source file.

use serde_json::json;

use playbook_core::PostMetadata;

use crate::error::RenderError;
use crate::escape::quote_js;
use crate::sections::Section;

/// Header marker identifying a page this tool already produced.
pub const GENERATED_MARKER: &str = "@generated by playbook-expand";

/// Import paths used by the emitted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Module providing the default-exported layout component.
    pub layout_import: String,
    /// Module providing the default-exported section navigation component.
    pub nav_import: String,
    /// Import prefix under which hero SVGs are served.
    pub asset_import_prefix: String,
}

/// Whether `source` starts with the header written by [`emit_page`].
///
/// Only the first non-blank line counts, so prose that mentions the marker
/// does not make a post look generated.
#[must_use]
pub fn is_generated(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.strip_prefix("//"))
        .is_some_and(|comment| comment.trim_start().starts_with(GENERATED_MARKER))
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            layout_import: "@/components/PlaybookLayout".to_string(),
            nav_import: "@/components/PlaybookNav".to_string(),
            asset_import_prefix: "@/assets/playbooks".to_string(),
        }
    }
}

impl EmitOptions {
    /// Import path of a hero asset.
    #[must_use]
    pub fn asset_import(&self, asset_file_name: &str) -> String {
        format!(
            "{}/{asset_file_name}",
            self.asset_import_prefix.trim_end_matches('/')
        )
    }
}

/// Emit a complete page source for a post.
///
/// Nothing from the post's existing body is carried over: the page is rebuilt from
/// `meta` and `sections`.
///
/// # Errors
///
/// Returns [`RenderError::Json`] if the data literal cannot be serialized.
pub fn emit_page(
    meta: &PostMetadata,
    sections: &[Section],
    asset_file_name: &str,
    options: &EmitOptions,
) -> Result<String, RenderError> {
    let data = serde_json::to_string_pretty(&json!({
        "meta": meta,
        "sections": sections,
    }))?;

    let mut lines = Vec::new();

    lines.push(format!("// {GENERATED_MARKER}. Do not edit by hand."));
    lines.push(String::new());

    lines.push(format!(
        "import PlaybookLayout from {};",
        quote_js(&options.layout_import)
    ));
    lines.push(format!(
        "import PlaybookNav from {};",
        quote_js(&options.nav_import)
    ));
    lines.push(format!(
        "import heroImage from {};",
        quote_js(&options.asset_import(asset_file_name))
    ));
    lines.push(String::new());

    lines.push(format!("export const playbook = {data};"));
    lines.push(String::new());

    lines.extend(COMPONENT.lines().map(str::to_string));

    Ok(lines.join("\n") + "\n")
}

const COMPONENT: &str = r#"export default function PlaybookPage() {
  const { meta, sections } = playbook;
  return (
    <PlaybookLayout meta={meta} heroImage={heroImage} heroAlt={meta.coverAlt ?? meta.title}>
      <PlaybookNav items={sections.map(({ id, title }) => ({ id, title }))} />
      {sections.map((section) => (
        <section key={section.id} id={section.id}>
          <h2>{section.title}</h2>
          <p>{section.summary}</p>
          <div className="playbook-perspectives">
            {section.perspectives.map((perspective) => (
              <article key={perspective.title}>
                <h3>{perspective.title}</h3>
                <p>{perspective.body}</p>
              </article>
            ))}
          </div>
          <ol className="playbook-plays">
            {section.plays.map((play) => (
              <li key={play.title}>
                <strong>{play.title}</strong> {play.detail}
              </li>
            ))}
          </ol>
        </section>
      ))}
    </PlaybookLayout>
  );
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::generate_sections;
    use playbook_core::derive;

    fn meta() -> PostMetadata {
        PostMetadata {
            title: "Growth Playbook".to_string(),
            slug: Some("growth".to_string()),
            tags: vec!["seo".to_string()],
            ..PostMetadata::default()
        }
    }

    #[test]
    fn test_emit_page_layout() {
        let meta = meta();
        let sections = generate_sections(&derive(&meta));
        let page = emit_page(&meta, &sections, "growth.svg", &EmitOptions::default()).unwrap();

        assert!(page.starts_with("// @generated by playbook-expand"));
        assert!(page.contains("import PlaybookLayout from \"@/components/PlaybookLayout\";"));
        assert!(page.contains("import PlaybookNav from \"@/components/PlaybookNav\";"));
        assert!(page.contains("import heroImage from \"@/assets/playbooks/growth.svg\";"));
        assert!(page.contains("export const playbook = {"));
        assert!(page.contains("export default function PlaybookPage()"));
        assert!(!page.contains("export const meta"));
        assert!(page.ends_with("}\n"));
    }

    #[test]
    fn test_data_literal_is_json() {
        let meta = meta();
        let sections = generate_sections(&derive(&meta));
        let page = emit_page(&meta, &sections, "growth.svg", &EmitOptions::default()).unwrap();

        let start = page.find("export const playbook = ").unwrap() + "export const playbook = ".len();
        let end = page[start..].find("};\n").unwrap() + start + 1;
        let value: serde_json::Value = serde_json::from_str(&page[start..end]).unwrap();
        assert_eq!(value["meta"]["title"], "Growth Playbook");
        assert_eq!(value["sections"].as_array().unwrap().len(), 16);
        assert_eq!(value["sections"][0]["id"], sections[0].id.as_str());
    }

    #[test]
    fn test_emitted_page_is_generated() {
        let page = emit_page(&meta(), &[], "growth.svg", &EmitOptions::default()).unwrap();
        assert!(is_generated(&page));
        assert!(is_generated(&format!("\n\n{page}")));
    }

    #[test]
    fn test_marker_outside_header_is_not_generated() {
        assert!(!is_generated(
            "export const meta = { title: 'About @generated by playbook-expand' };"
        ));
        assert!(!is_generated(
            "import x from './x';\n// @generated by playbook-expand. Do not edit by hand.\n"
        ));
        assert!(!is_generated(""));
    }

    #[test]
    fn test_custom_imports_are_quoted() {
        let options = EmitOptions {
            layout_import: "~/layouts/\"Doc\"".to_string(),
            nav_import: "~/nav".to_string(),
            asset_import_prefix: "/static/heroes/".to_string(),
        };
        let page = emit_page(&meta(), &[], "growth.svg", &options).unwrap();
        assert!(page.contains("import PlaybookLayout from \"~/layouts/\\\"Doc\\\"\";"));
        assert!(page.contains("import heroImage from \"/static/heroes/growth.svg\";"));
    }
}
