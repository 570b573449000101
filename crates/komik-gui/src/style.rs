//! Design tokens: spacing, typography, and layout constants.
//!
//! All spacing is based on a 4px grid. Typography uses a limited scale
//! so both screens draw from the same visual hierarchy.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 20.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 14.0;
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 20.0;
pub const TEXT_2XL: f32 = 24.0;

// Line heights (multipliers for `LineHeight::Relative`)
pub const LINE_HEIGHT_TIGHT: f32 = 1.2; // headings, display text
pub const LINE_HEIGHT_NORMAL: f32 = 1.45; // body text, labels
pub const LINE_HEIGHT_LOOSE: f32 = 1.6; // small/caption text

pub const FONT_HEADING: iced::Font = iced::Font {
    weight: iced::font::Weight::Bold,
    ..iced::Font::DEFAULT
};

pub const FONT_DISPLAY: iced::Font = iced::Font {
    weight: iced::font::Weight::Black,
    style: iced::font::Style::Italic,
    ..iced::Font::DEFAULT
};

// ── Layout ───────────────────────────────────────────────────────

pub const TOP_BAR_HEIGHT: f32 = 56.0;
pub const ICON_BUTTON_SIZE: f32 = 36.0;
pub const ICON_SIZE: f32 = 18.0;

/// Portrait grid card cover height; width follows the column.
pub const CARD_COVER_HEIGHT: f32 = 240.0;

/// Landscape row thumbnail.
pub const ROW_COVER_WIDTH: f32 = 90.0;
pub const ROW_COVER_HEIGHT: f32 = 130.0;

/// Detail header cover.
pub const HERO_COVER_WIDTH: f32 = 100.0;
pub const HERO_COVER_HEIGHT: f32 = 150.0;

pub const CHAPTER_ROW_HEIGHT: f32 = 73.0;
pub const CHAPTER_THUMB_WIDTH: f32 = 52.0;

/// Reading column width on the detail screen.
pub const DETAIL_MAX_WIDTH: f32 = 760.0;

// ── Filter chips ─────────────────────────────────────────────────

pub const CHIP_HEIGHT: f32 = 32.0;
pub const CHIP_RADIUS: f32 = 8.0;

// ── Badge dimensions ─────────────────────────────────────────────

pub const BADGE_PADDING_H: f32 = 6.0;

// ── Border radii ─────────────────────────────────────────────────

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_FULL: f32 = 9999.0;
