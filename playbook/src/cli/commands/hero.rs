//! `hero`: render one illustration outside a batch run.

use playbook_render::hero::render_hero;

use crate::cli::args::HeroArgs;
use crate::error::PlaybookError;

/// Render a hero SVG to a file or stdout.
///
/// # Errors
///
/// Returns [`PlaybookError::Usage`] for a blank topic and an I/O error if
/// the output file cannot be written.
pub fn run(args: &HeroArgs) -> Result<(), PlaybookError> {
    let topic = args.topic.trim();
    if topic.is_empty() {
        return Err(PlaybookError::Usage("--topic must not be empty".to_string()));
    }
    let keywords: Vec<String> = args
        .keywords
        .iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    let hero = render_hero(topic, &keywords);
    tracing::info!(seed = hero.seed, palette = hero.palette, "rendered hero");

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &hero.svg)?;
            tracing::info!(output = %path.display(), "wrote hero");
        }
        None => print!("{}", hero.svg),
    }
    Ok(())
}
