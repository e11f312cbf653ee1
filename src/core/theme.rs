//! Theme tokens shared by the server shell and the components.

/// Default accent colour (`#EB5E55`, the shop red)
pub const DEFAULT_ACCENT: &str = "#EB5E55";

/// Colour role used by cards, icons and placeholders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Info,
}

impl Tone {
    /// Solid background class
    pub fn bg_class(&self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary",
            Tone::Secondary => "bg-secondary",
            Tone::Accent => "bg-accent",
            Tone::Info => "bg-info",
        }
    }

    /// Foreground text class
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Primary => "text-primary",
            Tone::Secondary => "text-secondary",
            Tone::Accent => "text-accent",
            Tone::Info => "text-info",
        }
    }

    /// Tinted background with matching foreground
    pub fn soft_class(&self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary/10 text-primary",
            Tone::Secondary => "bg-secondary/10 text-secondary",
            Tone::Accent => "bg-accent/10 text-accent",
            Tone::Info => "bg-info/10 text-info",
        }
    }

    /// Button class matching the tone
    pub fn button_class(&self) -> &'static str {
        match self {
            Tone::Primary => "btn btn-primary",
            Tone::Secondary => "btn btn-secondary",
            Tone::Accent => "btn btn-accent",
            Tone::Info => "btn btn-info",
        }
    }
}

/// Resolved colour tokens injected into the document as CSS custom properties
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Accent colour as `#rrggbb`
    pub accent: String,
    /// Hover shade of the accent as `#rrggbb`
    pub accent_hover: String,
}

impl ThemeTokens {
    /// `:root` rule declaring the accent custom properties
    pub fn css_variables(&self) -> String {
        format!(
            ":root{{--color-accent:{};--color-accent-hover:{};}}",
            self.accent, self.accent_hover
        )
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT.to_ascii_lowercase(),
            accent_hover: "#ee766e".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables() {
        let tokens = ThemeTokens {
            accent: "#112233".to_string(),
            accent_hover: "#445566".to_string(),
        };
        assert_eq!(
            tokens.css_variables(),
            ":root{--color-accent:#112233;--color-accent-hover:#445566;}"
        );
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(Tone::Secondary.bg_class(), "bg-secondary");
        assert_eq!(Tone::Accent.text_class(), "text-accent");
        assert_eq!(Tone::Primary.button_class(), "btn btn-primary");
        assert_eq!(Tone::Info.soft_class(), "bg-info/10 text-info");
    }
}
