pub mod cover;
pub mod empty_state;
pub mod manga_card;
pub mod manga_row;

pub use cover::cover;
pub use empty_state::empty_state;
pub use manga_card::manga_card;
pub use manga_row::manga_row;

use iced::widget::{container, scrollable, text};
use iced::Element;

use komik_core::i18n::{self, Label, Language};
use komik_core::models::PublicationStatus;

use crate::style;
use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}

/// Two-state status badge: anything not ongoing reads as completed.
pub fn status_badge<'a, Message: 'a>(
    cs: &ColorScheme,
    status: PublicationStatus,
    lang: Language,
) -> Element<'a, Message> {
    let label = if status.is_ongoing() {
        Label::Ongoing
    } else {
        Label::Completed
    };
    container(
        text(i18n::label(lang, label))
            .size(style::TEXT_XS)
            .line_height(style::LINE_HEIGHT_NORMAL),
    )
    .padding([style::SPACE_XXS, style::BADGE_PADDING_H])
    .style(theme::status_badge(theme::status_color(cs, status)))
    .into()
}

/// Star and rating in the tertiary (gold) color.
pub fn rating<'a, Message: 'a>(cs: &ColorScheme, value: &str) -> Element<'a, Message> {
    text(format!("\u{2605} {value}"))
        .size(style::TEXT_SM)
        .font(style::FONT_HEADING)
        .color(cs.tertiary)
        .line_height(style::LINE_HEIGHT_NORMAL)
        .into()
}
