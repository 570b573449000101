use iced::widget::{center, column, container, text};
use iced::{Alignment, Element, Length};

use komik_core::filter::GenreFilter;
use komik_core::i18n::{self, Label, Language};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Shown when the search and genre facet leave nothing visible. Echoes the
/// active filters back so the user sees what to loosen.
pub fn empty_state<'a, Message: 'a>(
    cs: &ColorScheme,
    lang: Language,
    query: &str,
    genre: &GenreFilter,
) -> Element<'a, Message> {
    let mut content = column![
        lucide_icons::iced::icon_search_x()
            .size(48.0)
            .color(cs.outline),
        text(i18n::label(lang, Label::NoResults))
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_TIGHT),
        text(i18n::label(lang, Label::NoResultsHint))
            .size(style::TEXT_SM)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_MD)
    .align_x(Alignment::Center);

    if let Some(summary) = active_filters(query, genre) {
        content = content.push(
            container(
                text(summary)
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding([style::SPACE_XXS, style::SPACE_MD])
            .style(theme::metadata_badge(cs)),
        );
    }

    center(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// `"query" · Genre`, or whichever half is set.
fn active_filters(query: &str, genre: &GenreFilter) -> Option<String> {
    let query = query.trim();
    match (query.is_empty(), genre) {
        (true, GenreFilter::All) => None,
        (false, GenreFilter::All) => Some(format!("\u{201c}{query}\u{201d}")),
        (true, GenreFilter::Genre(g)) => Some(g.clone()),
        (false, GenreFilter::Genre(g)) => Some(format!("\u{201c}{query}\u{201d} \u{b7} {g}")),
    }
}
