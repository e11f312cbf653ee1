//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::fmt;
use std::str::FromStr;

use super::theme::ThemeTokens;

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a #RRGGBB or #RGB hex colour, got {value:?}")]
    InvalidColor { var: &'static str, value: String },
}

/// An sRGB colour parsed from `#RRGGBB` or `#RGB`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    /// Mix the colour with white by `percent`
    pub fn lighten(&self, percent: u8) -> Self {
        let percent = u16::from(percent.min(100));
        let mix = |c: u8| {
            let c = u16::from(c);
            (c + (255 - c) * percent / 100) as u8
        };
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }

    pub fn to_tokens(&self) -> ThemeTokens {
        ThemeTokens {
            accent: self.to_string(),
            accent_hover: self.lighten(15).to_string(),
        }
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self {
            r: 0xeb,
            g: 0x5e,
            b: 0x55,
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for AccentColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor {
            var: "ACCENT_COLOR",
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self {
                    r: short(0)?,
                    g: short(1)?,
                    b: short(2)?,
                })
            }
            _ => Err(invalid()),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Accent colour for buttons and highlights (`ACCENT_COLOR`)
    pub accent_color: AccentColor,

    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file. An
    /// invalid colour is returned as the error alongside the fallback config.
    pub fn from_env() -> (Self, Option<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Option<ConfigError>) {
        let (accent_color, error) = match lookup("ACCENT_COLOR") {
            Some(value) if !value.trim().is_empty() => match value.parse() {
                Ok(color) => (color, None),
                Err(err) => (AccentColor::default(), Some(err)),
            },
            _ => (AccentColor::default(), None),
        };

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        (
            Self {
                accent_color,
                log_filter,
            },
            error,
        )
    }

    pub fn theme(&self) -> ThemeTokens {
        self.accent_color.to_tokens()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent_color: AccentColor::default(),
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::DEFAULT_ACCENT;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    // ========================================================================
    // Colour parsing
    // ========================================================================

    #[test]
    fn test_parse_long_hex() {
        let color: AccentColor = "#1A2b3C".parse().unwrap();
        assert_eq!(
            color,
            AccentColor {
                r: 0x1a,
                g: 0x2b,
                b: 0x3c
            }
        );
        assert_eq!(color.to_string(), "#1a2b3c");
    }

    #[test]
    fn test_parse_short_hex() {
        let color: AccentColor = "#f80".parse().unwrap();
        assert_eq!(color.to_string(), "#ff8800");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "EB5E55", "#EB5E5", "#GGGGGG", "#12345678", "red", "#ébc"] {
            assert!(bad.parse::<AccentColor>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_error_message_names_variable() {
        let err = "blue".parse::<AccentColor>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "ACCENT_COLOR must be a #RRGGBB or #RGB hex colour, got \"blue\""
        );
    }

    #[test]
    fn test_default_matches_constant() {
        let parsed: AccentColor = DEFAULT_ACCENT.parse().unwrap();
        assert_eq!(parsed, AccentColor::default());
    }

    // ========================================================================
    // Hover shade
    // ========================================================================

    #[test]
    fn test_lighten() {
        let black = AccentColor { r: 0, g: 0, b: 0 };
        assert_eq!(black.lighten(15).to_string(), "#262626");
        assert_eq!(black.lighten(100).to_string(), "#ffffff");
        assert_eq!(black.lighten(0), black);

        let white = AccentColor {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(white.lighten(15), white);
    }

    #[test]
    fn test_default_tokens_match_theme_default() {
        assert_eq!(AccentColor::default().to_tokens(), ThemeTokens::default());
    }

    // ========================================================================
    // Config loading (no env var mutation - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let (config, error) = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_config_reads_variables() {
        let (config, error) = Config::from_lookup(lookup(&[
            ("ACCENT_COLOR", "#336699"),
            ("RUST_LOG", "swblends=debug"),
        ]));
        assert!(error.is_none());
        assert_eq!(config.accent_color.to_string(), "#336699");
        assert_eq!(config.log_filter, "swblends=debug");
        assert_eq!(config.theme().accent, "#336699");
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let (config, error) = Config::from_lookup(lookup(&[("ACCENT_COLOR", "tomato")]));
        assert_eq!(config.accent_color, AccentColor::default());
        assert!(matches!(
            error,
            Some(ConfigError::InvalidColor { var: "ACCENT_COLOR", .. })
        ));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let (config, error) =
            Config::from_lookup(lookup(&[("ACCENT_COLOR", "  "), ("RUST_LOG", "")]));
        assert!(error.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on the environment
        let (config, _) = Config::from_env();
        assert!(!config.log_filter.is_empty());
    }
}
