//! Gradient palettes and accent colors.

/// Three-stop background gradients, indexed by `hash(topic) % 9`.
pub const PALETTES: [[&str; 3]; 9] = [
    ["#0f172a", "#1e3a8a", "#3b82f6"],
    ["#1f2937", "#7c3aed", "#c084fc"],
    ["#064e3b", "#059669", "#34d399"],
    ["#7c2d12", "#ea580c", "#fdba74"],
    ["#831843", "#db2777", "#f9a8d4"],
    ["#134e4a", "#0d9488", "#5eead4"],
    ["#1e1b4b", "#4338ca", "#818cf8"],
    ["#3f6212", "#65a30d", "#bef264"],
    ["#172554", "#0369a1", "#38bdf8"],
];

/// Node and connector colors, indexed by `hash(topic + "accent") % 6`.
pub const ACCENTS: [&str; 6] = [
    "#facc15", "#f472b6", "#22d3ee", "#a3e635", "#fb923c", "#f8fafc",
];

/// Pick the gradient for a topic hash.
#[must_use]
pub const fn palette_for(hash: u32) -> &'static [&'static str; 3] {
    &PALETTES[hash as usize % PALETTES.len()]
}

/// Pick the accent for an accent hash.
#[must_use]
pub const fn accent_for(hash: u32) -> &'static str {
    ACCENTS[hash as usize % ACCENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_index_wraps() {
        assert_eq!(palette_for(0), &PALETTES[0]);
        assert_eq!(palette_for(9), &PALETTES[0]);
        assert_eq!(palette_for(46_500), &PALETTES[6]);
    }

    #[test]
    fn test_accent_index_wraps() {
        assert_eq!(accent_for(6), ACCENTS[0]);
        assert_eq!(accent_for(65_782), ACCENTS[65_782 % 6]);
    }

    #[test]
    fn test_colors_are_hex() {
        for color in PALETTES.iter().flatten().chain(ACCENTS.iter()) {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }
}
