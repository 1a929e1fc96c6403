use ratatui::style::Color;

use crate::model::UiConfig;

/// Color theme for the TUI. Two built-in palettes (light and dark), with
/// per-color hex overrides from `[ui.colors]` in config.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub done: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xFA, 0xFA),
            text: Color::Rgb(0x49, 0x4C, 0x6B),
            text_bright: Color::Rgb(0x16, 0x18, 0x28),
            dim: Color::Rgb(0x94, 0x95, 0xA5),
            highlight: Color::Rgb(0x3A, 0x7C, 0xFD),
            done: Color::Rgb(0x9E, 0xD5, 0x9E),
            selection_bg: Color::Rgb(0xE3, 0xE4, 0xF1),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x17, 0x18, 0x23),
            text: Color::Rgb(0xC8, 0xCB, 0xE7),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x5B, 0x5E, 0x7E),
            highlight: Color::Rgb(0x3A, 0x7C, 0xFD),
            done: Color::Rgb(0x4D, 0x7C, 0x4D),
            selection_bg: Color::Rgb(0x2E, 0x30, 0x48),
        }
    }

    /// Build a theme for the given mode, applying `[ui.colors]` overrides.
    pub fn from_config(dark: bool, ui: &UiConfig) -> Self {
        let mut theme = if dark { Theme::dark() } else { Theme::light() };

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "done" => theme.done = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UiConfig;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::light().background, Theme::dark().background);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("unknown-key".into(), "#112233".into());

        let theme = Theme::from_config(false, &ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Unchanged defaults still present
        assert_eq!(theme.highlight, Theme::light().highlight);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "nope".into());
        let theme = Theme::from_config(true, &ui);
        assert_eq!(theme.background, Theme::dark().background);
    }
}
