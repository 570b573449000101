use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use komik_core::display;
use komik_core::i18n::Language;
use komik_core::models::CatalogRecord;

use crate::cover_cache::CoverCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Portrait grid card: cover, two-line title, status badge and rating.
///
/// Fills its grid column; the caller sizes the column.
pub fn manga_card<'a, Message: Clone + 'static>(
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
        Length::Fill,
        style::CARD_COVER_HEIGHT,
        style::RADIUS_MD,
    );

    // Title (clipped to 2 lines via container height)
    let title = container(
        text(display::display_title(record).to_string())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_BASE * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let meta = row![
        widgets::status_badge(cs, record.status, lang),
        container(widgets::rating(cs, display::display_rating(record)))
            .width(Length::Fill)
            .align_right(Length::Fill),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center);

    let content = column![cover, title, meta]
        .spacing(style::SPACE_SM)
        .padding(style::SPACE_SM)
        .width(Length::Fill);

    button(container(content).style(theme::manga_card_style(cs)))
        .padding(0)
        .width(Length::Fill)
        .on_press(on_select)
        .style(theme::manga_card_button(cs))
        .into()
}
