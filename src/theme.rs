//! The color palette, with optional overrides from the config file.

use ratatui::style::Color;

use crate::config::Config;

/// The app's fixed palette.
///
/// A deep-indigo background, purple goal rows, and a pink cancel accent.
/// `accent` and `background` can be overridden from the config file.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Root view background.
    pub background: Color,

    /// Input modal background.
    pub surface: Color,

    /// Goal rows and the submit hint.
    pub accent: Color,

    /// The add trigger.
    pub trigger: Color,

    /// The cancel hint.
    pub danger: Color,

    /// Background of a goal row while it is selected.
    pub pressed: Color,

    /// Placeholders and help lines.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x1e, 0x08, 0x5a),
            surface: Color::Rgb(0x31, 0x1b, 0x6b),
            accent: Color::Rgb(0x5e, 0x0a, 0xcc),
            trigger: Color::Rgb(0x67, 0x00, 0xce),
            danger: Color::Rgb(0xf3, 0x12, 0x82),
            pressed: Color::Rgb(0x21, 0x06, 0x44),
            muted: Color::Rgb(0xcc, 0xcc, 0xcc),
        }
    }
}

impl Theme {
    /// Applies config overrides on top of the defaults.
    /// Returns an error naming the offending value when one fails to parse.
    pub fn from_config(config: &Config) -> Result<Self, ColorError> {
        let mut theme = Self::default();
        if let Some(accent) = &config.accent {
            theme.accent = parse_color(accent)?;
        }
        if let Some(background) = &config.background {
            theme.background = parse_color(background)?;
        }
        Ok(theme)
    }
}

/// A color override that is not a hex triple.
#[derive(Debug, thiserror::Error)]
#[error("invalid color {value:?}: expected a hex triple like \"#5e0acc\"")]
pub struct ColorError {
    value: String,
}

/// Parses a `#rrggbb` color; the leading `#` is optional.
fn parse_color(value: &str) -> Result<Color, ColorError> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let bytes = hex::decode(digits).map_err(|_| ColorError {
        value: value.to_string(),
    })?;
    let [r, g, b] = bytes[..] else {
        return Err(ColorError {
            value: value.to_string(),
        });
    };
    Ok(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_triples_with_and_without_hash() {
        assert_eq!(parse_color("#5e0acc").unwrap(), Color::Rgb(0x5e, 0x0a, 0xcc));
        assert_eq!(parse_color("F31282").unwrap(), Color::Rgb(0xf3, 0x12, 0x82));
    }

    #[test]
    fn rejects_non_hex_and_wrong_lengths() {
        assert!(parse_color("#purple").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#5e0accff").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn config_overrides_apply_on_top_of_defaults() {
        let config = Config {
            accent: Some("#ff0000".into()),
            background: None,
        };

        let theme = Theme::from_config(&config).unwrap();

        assert_eq!(theme.accent, Color::Rgb(0xff, 0x00, 0x00));
        assert_eq!(theme.background, Theme::default().background);
    }

    #[test]
    fn bad_override_reports_the_value() {
        let config = Config {
            accent: Some("magenta".into()),
            background: None,
        };

        let err = Theme::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("magenta"));
    }
}
