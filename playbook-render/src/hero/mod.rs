//! Deterministic hero illustrations.
//!
//! Each post gets a 1200×630 SVG derived only from its topic and keywords:
//! the topic hash picks the gradient and accent, and a hash of topic plus
//! keywords seeds the layout generator. Same inputs, byte-identical output.
//!
//! Layout draws happen in a fixed order (wave offsets, node positions,
//! connector offsets). Reordering them changes every illustration.

pub mod hash;
pub mod palette;
pub mod prng;

use crate::escape::escape_xml;

pub use hash::hash_string;
pub use prng::Lcg;

/// Canvas width in pixels.
pub const WIDTH: f64 = 1200.0;
/// Canvas height in pixels.
pub const HEIGHT: f64 = 630.0;
/// Inset kept clear of nodes on every side.
pub const MARGIN: f64 = 80.0;

/// Number of stacked wave bands.
const WAVE_COUNT: usize = 3;
/// Maximum number of keyword nodes.
const MAX_NODES: usize = 3;
/// Top edge of the node band, below the text labels.
const NODE_BAND_TOP: f64 = 240.0;
/// Separator between uppercased keywords in the subtitle.
const KEYWORD_SEPARATOR: &str = " \u{2022} ";
const FONT_STACK: &str = "Inter, Helvetica, Arial, sans-serif";

/// A generated hero illustration.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroIllustration {
    /// Complete SVG document.
    pub svg: String,
    /// Layout seed derived from topic and keywords.
    pub seed: u32,
    /// Index into [`palette::PALETTES`].
    pub palette: usize,
}

/// A keyword node on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Node {
    x: f64,
    y: f64,
    r: f64,
}

/// Seed for the layout generator: `hash(topic + keywords joined by ",")`.
#[must_use]
pub fn layout_seed(topic: &str, keywords: &[String]) -> u32 {
    hash_string(&format!("{topic}{}", keywords.join(",")))
}

/// Render the hero illustration for a topic and its keywords.
#[must_use]
pub fn render_hero(topic: &str, keywords: &[String]) -> HeroIllustration {
    let topic_hash = hash_string(topic);
    let colors = palette::palette_for(topic_hash);
    let accent = palette::accent_for(hash_string(&format!("{topic}accent")));
    let seed = layout_seed(topic, keywords);
    let mut rng = Lcg::new(seed);

    // Draw order: waves, nodes, connectors.
    let waves: Vec<String> = (0..WAVE_COUNT).map(|i| wave_path(i, &mut rng)).collect();
    let nodes: Vec<Node> = keywords
        .iter()
        .take(MAX_NODES)
        .map(|_| place_node(&mut rng))
        .collect();
    let connectors: Vec<String> = nodes
        .windows(2)
        .map(|pair| connector_path(pair[0], pair[1], &mut rng))
        .collect();

    let subtitle = keywords
        .iter()
        .map(|k| k.to_uppercase())
        .collect::<Vec<_>>()
        .join(KEYWORD_SEPARATOR);

    let mut lines = Vec::new();
    lines.push(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\" aria-label=\"{}\">",
        escape_xml(topic)
    ));
    lines.push("  <defs>".to_string());
    lines.push(
        "    <linearGradient id=\"hero-bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">".to_string(),
    );
    for (stop, color) in ["0%", "50%", "100%"].iter().zip(colors.iter()) {
        lines.push(format!(
            "      <stop offset=\"{stop}\" stop-color=\"{color}\"/>"
        ));
    }
    lines.push("    </linearGradient>".to_string());
    lines.push("  </defs>".to_string());
    lines.push(format!(
        "  <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" rx=\"32\" fill=\"url(#hero-bg)\"/>"
    ));

    lines.push("  <g fill=\"#ffffff\">".to_string());
    for (i, d) in waves.iter().enumerate() {
        lines.push(format!(
            "    <path d=\"{d}\" fill-opacity=\"{:.2}\"/>",
            0.08 + 0.06 * i as f64
        ));
    }
    lines.push("  </g>".to_string());

    lines.push(format!(
        "  <g fill=\"none\" stroke=\"{accent}\" stroke-width=\"3\" stroke-opacity=\"0.7\" stroke-linecap=\"round\">"
    ));
    for d in &connectors {
        lines.push(format!("    <path d=\"{d}\"/>"));
    }
    lines.push("  </g>".to_string());

    lines.push(format!("  <g fill=\"{accent}\">"));
    for node in &nodes {
        lines.push(format!(
            "    <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"/>",
            node.x, node.y, node.r
        ));
    }
    lines.push("  </g>".to_string());

    lines.push(format!(
        "  <text x=\"{MARGIN}\" y=\"140\" font-family=\"{FONT_STACK}\" font-size=\"56\" font-weight=\"700\" fill=\"#ffffff\">{}</text>",
        escape_xml(topic)
    ));
    lines.push(format!(
        "  <text x=\"{MARGIN}\" y=\"196\" font-family=\"{FONT_STACK}\" font-size=\"22\" letter-spacing=\"4\" fill=\"#ffffff\" fill-opacity=\"0.85\">{}</text>",
        escape_xml(&subtitle)
    ));
    lines.push("</svg>".to_string());

    HeroIllustration {
        svg: lines.join("\n") + "\n",
        seed,
        palette: topic_hash as usize % palette::PALETTES.len(),
    }
}

/// Cubic wave band `index`, lower on the canvas for higher indices.
fn wave_path(index: usize, rng: &mut Lcg) -> String {
    let offset = rng.range(0.0, 40.0);
    let y = (index as f64).mul_add(70.0, 380.0) + offset;
    let swing = 50.0 + 10.0 * index as f64;
    format!(
        "M0 {y:.1} C300 {:.1} 900 {:.1} {WIDTH} {y:.1} L{WIDTH} {HEIGHT} L0 {HEIGHT} Z",
        y - swing,
        y + swing
    )
}

/// Place one node inside the node band, clamped clear of the margins.
fn place_node(rng: &mut Lcg) -> Node {
    let x = rng.range(MARGIN, WIDTH - MARGIN);
    let y = rng.range(NODE_BAND_TOP, HEIGHT - MARGIN);
    let r = rng.range(14.0, 36.0);
    Node {
        x: x.clamp(MARGIN + r, WIDTH - MARGIN - r),
        y: y.clamp(NODE_BAND_TOP + r, HEIGHT - MARGIN - r),
        r,
    }
}

/// Quadratic curve from `from` to `to`, bowing upward by a drawn offset.
fn connector_path(from: Node, to: Node, rng: &mut Lcg) -> String {
    let lift = rng.range(40.0, 140.0);
    let cx = f64::midpoint(from.x, to.x);
    let cy = (from.y.min(to.y) - lift).max(0.0);
    format!(
        "M{:.1} {:.1} Q{cx:.1} {cy:.1} {:.1} {:.1}",
        from.x, from.y, to.x, to.y
    )
}
