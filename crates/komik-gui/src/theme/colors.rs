//! Semantic color tokens for the application.
//!
//! Tonal surface hierarchy plus publication-status colors, deserialized from
//! TOML theme files via hex color strings.

use iced::Color;
use serde::Deserialize;

// ── Hex color serde ─────────────────────────────────────────────────

mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_hex_color(s: &str) -> Result<Color, String> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(format!("invalid hex color: {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| e.to_string())
        };
        match hex.len() {
            6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let a = channel(6..8)?;
                Ok(Color::from_rgba8(
                    channel(0..2)?,
                    channel(2..4)?,
                    channel(4..6)?,
                    a as f32 / 255.0,
                ))
            }
            _ => Err(format!("invalid hex color: {s}")),
        }
    }
}

// ── TOML intermediate structs ──────────────────────────────────────

/// Raw TOML theme file structure.
///
/// Each file defines one theme with both dark and light variants.
#[derive(Debug, Deserialize)]
pub struct ThemeFile {
    pub meta: ThemeMeta,
    pub dark: ThemeVariant,
    pub light: ThemeVariant,
}

#[derive(Debug, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

/// A single appearance variant (dark or light) within a theme.
#[derive(Debug, Deserialize)]
pub struct ThemeVariant {
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub primary: PrimaryColors,
    pub secondary: SecondaryColors,
    pub tertiary: TertiaryColors,
    pub error: ErrorColors,
    pub status: StatusColors,
}

#[derive(Debug, Deserialize)]
pub struct SurfaceColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub container_low: Color,
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub container_high: Color,
    #[serde(with = "hex_color")]
    pub bright: Color,
}

#[derive(Debug, Deserialize)]
pub struct TextColors {
    #[serde(with = "hex_color")]
    pub on_surface: Color,
    #[serde(with = "hex_color")]
    pub on_surface_variant: Color,
    #[serde(with = "hex_color")]
    pub outline: Color,
    #[serde(with = "hex_color")]
    pub outline_variant: Color,
}

#[derive(Debug, Deserialize)]
pub struct PrimaryColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub hover: Color,
    #[serde(with = "hex_color")]
    pub on_primary: Color,
}

#[derive(Debug, Deserialize)]
pub struct SecondaryColors {
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub on_container: Color,
}

#[derive(Debug, Deserialize)]
pub struct TertiaryColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub on_tertiary: Color,
}

#[derive(Debug, Deserialize)]
pub struct ErrorColors {
    #[serde(with = "hex_color")]
    pub base: Color,
}

#[derive(Debug, Deserialize)]
pub struct StatusColors {
    #[serde(with = "hex_color")]
    pub ongoing: Color,
    #[serde(with = "hex_color")]
    pub completed: Color,
}

// Re-export ThemeMode from core so there's a single source of truth.
pub use komik_core::config::ThemeMode;

// ── ColorScheme ────────────────────────────────────────────────────

/// All semantic color tokens for the application.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (amber)
    pub primary: Color,
    pub primary_hover: Color,
    pub on_primary: Color,

    pub secondary_container: Color,
    pub on_secondary_container: Color,

    // Tertiary (gold): ratings and chapter numbers
    pub tertiary: Color,
    pub on_tertiary: Color,

    pub error: Color,

    // Publication status
    pub status_ongoing: Color,
    pub status_completed: Color,
}

impl ColorScheme {
    /// Build a ColorScheme from a single theme variant.
    pub fn from_variant(v: &ThemeVariant) -> Self {
        Self {
            surface: v.surface.base,
            surface_container_low: v.surface.container_low,
            surface_container: v.surface.container,
            surface_container_high: v.surface.container_high,
            surface_bright: v.surface.bright,

            on_surface: v.text.on_surface,
            on_surface_variant: v.text.on_surface_variant,
            outline: v.text.outline,
            outline_variant: v.text.outline_variant,

            primary: v.primary.base,
            primary_hover: v.primary.hover,
            on_primary: v.primary.on_primary,

            secondary_container: v.secondary.container,
            on_secondary_container: v.secondary.on_container,

            tertiary: v.tertiary.base,
            on_tertiary: v.tertiary.on_tertiary,

            error: v.error.base,

            status_ongoing: v.status.ongoing,
            status_completed: v.status.completed,
        }
    }
}
