use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use komik_core::display;
use komik_core::i18n::{self, Label, Language};
use komik_core::models::CatalogRecord;

use crate::cover_cache::CoverCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Landscape list row: thumbnail, title, rating, status, synopsis excerpt.
pub fn manga_row<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    record: &CatalogRecord,
    cover_url: &str,
    lang: Language,
    on_select: Message,
) -> Element<'a, Message> {
    let cover = widgets::cover(
        cs,
        covers,
        cover_url,
        Length::Fixed(style::ROW_COVER_WIDTH),
        style::ROW_COVER_HEIGHT,
        style::RADIUS_MD,
    );

    let synopsis = display::display_synopsis(record)
        .unwrap_or_else(|| i18n::label(lang, Label::NoSynopsis))
        .to_string();

    let details = column![
        text(display::display_title(record).to_string())
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT),
        row![
            widgets::rating(cs, display::display_rating(record)),
            widgets::status_badge(cs, record.status, lang),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
        // Three lines of synopsis, clipped.
        container(
            text(synopsis)
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        )
        .height(Length::Fixed(style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 3.0 + 2.0))
        .clip(true),
    ]
    .spacing(style::SPACE_XS)
    .width(Length::Fill);

    let content = row![cover, details]
        .spacing(style::SPACE_LG)
        .padding(style::SPACE_MD)
        .align_y(Alignment::Center);

    button(container(content).style(theme::manga_card_style(cs)))
        .padding(0)
        .width(Length::Fill)
        .on_press(on_select)
        .style(theme::manga_card_button(cs))
        .into()
}
