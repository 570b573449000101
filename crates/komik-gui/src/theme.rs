//! Application theme: tonal surfaces with an amber accent.
//!
//! The theme is a single embedded TOML file containing both dark and light
//! variants. The header toggle flips between them at runtime.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Embedded default theme TOML source (contains both dark and light).
pub(crate) const DEFAULT_THEME_TOML: &str = include_str!("../assets/themes/default.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct KomikTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl KomikTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name,
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// Load the embedded default theme.
    pub fn default_theme() -> Self {
        Self::from_toml(DEFAULT_THEME_TOML).expect("embedded default theme is valid TOML")
    }

    /// Get the color scheme for a resolved mode (Dark or Light).
    pub fn colors(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            // Dark is the fallback for both Dark and System.
            _ => &self.dark,
        }
    }

    /// Build the iced Theme for a given mode.
    pub fn iced_theme(&self, mode: ThemeMode) -> Theme {
        build_theme(&self.name, self.colors(mode))
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Flip a resolved mode.
pub fn toggled(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Light => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(name: &str, cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        name.to_string(),
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.status_ongoing,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_loads() {
        let theme = KomikTheme::default_theme();
        assert_eq!(theme.name, "Komik");
        assert_ne!(theme.dark.surface, theme.light.surface);
    }

    #[test]
    fn test_colors_for_mode() {
        let theme = KomikTheme::default_theme();
        assert_eq!(theme.colors(ThemeMode::Light).surface, theme.light.surface);
        assert_eq!(theme.colors(ThemeMode::Dark).surface, theme.dark.surface);
    }

    #[test]
    fn test_toggle_flips_resolved_mode() {
        assert_eq!(toggled(ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(toggled(ThemeMode::Light), ThemeMode::Dark);
    }

    #[test]
    fn test_explicit_mode_is_not_detected() {
        assert_eq!(resolve_mode(ThemeMode::Light), ThemeMode::Light);
        assert_eq!(resolve_mode(ThemeMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_theme_reports_error() {
        let err = KomikTheme::from_toml("[meta]\nname = \"x\"").unwrap_err();
        assert!(err.starts_with("theme parse error"));
    }
}
