//! Style functions parameterized by ColorScheme.
//!
//! Each function returns a closure suitable for Iced's `.style()` method,
//! capturing the needed color tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use komik_core::models::PublicationStatus;

use crate::style;

use super::ColorScheme;

/// App bar across the top of the list screen.
pub fn top_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let text = cs.on_surface;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Filter chip: outlined when unselected, tonal fill when selected.
pub fn filter_chip(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let secondary_container = cs.secondary_container;
    let on_secondary_container = cs.on_secondary_container;
    let outline_variant = cs.outline_variant;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        if selected {
            button::Style {
                background: Some(Background::Color(secondary_container)),
                text_color: on_secondary_container,
                border: Border {
                    radius: style::CHIP_RADIUS.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        } else {
            let (bg, tc) = match status {
                button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
                _ => (None, on_surface_variant),
            };
            button::Style {
                background: bg,
                text_color: tc,
                border: Border {
                    color: outline_variant,
                    width: 1.0,
                    radius: style::CHIP_RADIUS.into(),
                },
                ..Default::default()
            }
        }
    }
}

/// Outlined accent button (the favorite button on the detail header).
pub fn outlined_primary_button(
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(Color { a: 0.12, ..primary })), primary_hover),
            button::Status::Pressed => (Some(Background::Color(Color { a: 0.2, ..primary })), primary),
            _ => (None, primary),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                color: primary,
                width: 1.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button: no border, subtle hover.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text input for use inside a composite search bar container.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: primary,
    }
}

/// Composite search bar container: pill-shaped with subtle border.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Cover art placeholder container.
pub fn cover_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Manga card container: raised surface with a soft shadow.
pub fn manga_card_style(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.12,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Manga card button: transparent with hover tint.
pub fn manga_card_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    move |_theme, status| {
        let border_color = match status {
            button::Status::Hovered => primary,
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: None,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Chapter row: dark strip over the cover with a gold number.
pub fn chapter_row(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_LG.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.15,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Round translucent button used for the chapter "read" control.
pub fn round_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let primary = cs.primary;
    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Color { a: 0.3, ..primary },
            _ => surface_bright,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: style::RADIUS_FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Subtle outlined badge for publication status labels.
pub fn status_badge(status_color: Color) -> impl Fn(&Theme) -> container::Style {
    let bg = Color {
        a: 0.12,
        ..status_color
    };
    let border_color = Color {
        a: 0.35,
        ..status_color
    };
    move |_theme| container::Style {
        text_color: Some(status_color),
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

/// Badge color for a publication status. Unknown shares the completed color.
pub fn status_color(cs: &ColorScheme, status: PublicationStatus) -> Color {
    if status.is_ongoing() {
        cs.status_ongoing
    } else {
        cs.status_completed
    }
}

/// Metadata badge (genre pill): tonal surface with outline border.
pub fn metadata_badge(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    let text = cs.on_surface_variant;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Overlay scrollbar: thin transparent rail, pill scroller that becomes
/// more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}
