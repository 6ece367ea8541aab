use crate::render::Color;

use super::ThemeConfig;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Fallback hues for categories without a keyword rule.
pub const CATEGORY_PALETTE: [Color; 9] = [
    Color::from_rgb8(0x38, 0xbd, 0xf8), // sky
    Color::from_rgb8(0xfb, 0x71, 0x85), // rose
    Color::from_rgb8(0xa3, 0xe6, 0x35), // lime
    Color::from_rgb8(0xf9, 0x73, 0x16), // orange
    Color::from_rgb8(0x2d, 0xd4, 0xbf), // teal
    Color::from_rgb8(0x60, 0xa5, 0xfa), // blue
    Color::from_rgb8(0xea, 0xb3, 0x08), // yellow
    Color::from_rgb8(0x34, 0xd3, 0x99), // emerald
    Color::from_rgb8(0xf4, 0x72, 0xb6), // pink
];

/// Near-white used for catch-all "other" categories.
pub const NEUTRAL_CATEGORY_COLOR: Color = Color::from_rgba8(255, 255, 255, 0.72);

/// 32-bit FNV-1a over the UTF-16 code units of `input`.
#[must_use]
pub fn fnv1a_32(input: &str) -> u32 {
    input.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Which rule resolved a category's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRule {
    Mediation,
    Legal,
    Other,
    Palette(usize),
}

/// Deterministic category → color assignment.
///
/// Keyword rules are checked in order against the lowercased label (first match
/// wins); anything else indexes the fallback palette by hash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryColors {
    accent: Color,
    secondary_accent: Color,
}

impl CategoryColors {
    #[must_use]
    pub fn new(theme: &ThemeConfig) -> Self {
        Self {
            accent: theme.accent,
            secondary_accent: theme.secondary_accent,
        }
    }

    #[must_use]
    pub fn rule_for(category: &str) -> ColorRule {
        let label = category.to_lowercase();
        if label.contains("mediat") {
            ColorRule::Mediation
        } else if ["legal", "counsel", "solicitor"]
            .iter()
            .any(|keyword| label.contains(keyword))
        {
            ColorRule::Legal
        } else if label.contains("other") {
            ColorRule::Other
        } else {
            ColorRule::Palette(fnv1a_32(category) as usize % CATEGORY_PALETTE.len())
        }
    }

    #[must_use]
    pub fn color_for(&self, category: &str) -> Color {
        match Self::rule_for(category) {
            ColorRule::Mediation => self.secondary_accent,
            ColorRule::Legal => self.accent,
            ColorRule::Other => NEUTRAL_CATEGORY_COLOR,
            ColorRule::Palette(index) => CATEGORY_PALETTE[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fnv1a_32;

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
        assert_eq!(fnv1a_32("foobar"), 0xbf9c_f968);
    }
}
