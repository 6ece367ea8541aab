use tracing::warn;

use crate::render::Color;

pub const ACCENT_PROPERTY: &str = "--accent";
pub const SECONDARY_ACCENT_PROPERTY: &str = "--accent2";
pub const AXIS_LINE_PROPERTY: &str = "--border";
pub const MUTED_TEXT_PROPERTY: &str = "--faint";
pub const TEXT_PROPERTY: &str = "--text";
pub const MONO_FONT_PROPERTY: &str = "--font-mono";

/// Named presentation values read from the host, with hard-coded fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub accent: Color,
    pub secondary_accent: Color,
    pub axis_line: Color,
    pub muted_text: Color,
    pub text: Color,
    pub mono_font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: Color::from_rgb8(0xfb, 0xbf, 0x24),
            secondary_accent: Color::from_rgb8(0x22, 0xc5, 0x5e),
            axis_line: Color::from_rgba8(255, 255, 255, 0.16),
            muted_text: Color::from_rgba8(255, 255, 255, 0.56),
            text: Color::from_rgba8(255, 255, 255, 0.92),
            mono_font_family: "ui-monospace".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Resolves every field through `lookup(property_name)`.
    ///
    /// Missing or blank values keep the default; color values that fail to parse
    /// keep the default and log a warning.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let color = |name: &str, fallback: Color| -> Color {
            let Some(raw) = non_blank(lookup(name)) else {
                return fallback;
            };
            match Color::parse_css(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(property = name, error = %err, "theme color fallback");
                    fallback
                }
            }
        };

        Self {
            accent: color(ACCENT_PROPERTY, defaults.accent),
            secondary_accent: color(SECONDARY_ACCENT_PROPERTY, defaults.secondary_accent),
            axis_line: color(AXIS_LINE_PROPERTY, defaults.axis_line),
            muted_text: color(MUTED_TEXT_PROPERTY, defaults.muted_text),
            text: color(TEXT_PROPERTY, defaults.text),
            mono_font_family: non_blank(lookup(MONO_FONT_PROPERTY))
                .unwrap_or(defaults.mono_font_family),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}
