use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use komik_core::display::{self, PlaceholderChapter};
use komik_core::i18n::{self, Label, Language};
use komik_core::models::CatalogRecord;
use komik_core::session::BrowseEvent;

use crate::cover_cache::CoverCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Messages handled by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    CopyTitle,
    /// Decorative; there is no favorites list.
    Favorite,
    /// Decorative; chapters have no content.
    ReadChapter(u32),
}

pub fn update(msg: Message) -> Action {
    match msg {
        Message::Back => Action::Browse(BrowseEvent::Back),
        Message::CopyTitle => Action::CopyTitle,
        Message::Favorite => Action::None,
        Message::ReadChapter(number) => {
            tracing::debug!(number, "chapter placeholder pressed");
            Action::None
        }
    }
}

pub fn view<'a>(
    record: &'a CatalogRecord,
    cs: &ColorScheme,
    covers: &'a CoverCache,
    cover_base: &str,
    lang: Language,
    title_copied: bool,
) -> Element<'a, Message> {
    let image_url = display::image_url_from(record, cover_base);

    let back = button(
        row![
            lucide_icons::iced::icon_arrow_left()
                .size(style::ICON_SIZE)
                .color(cs.on_surface),
            text(i18n::label(lang, Label::Back))
                .size(style::TEXT_SM)
                .color(cs.on_surface),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    )
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(Message::Back)
    .style(theme::icon_button(cs));

    let mut title_block = column![
        text(display::display_title(record))
            .size(style::TEXT_2XL)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT),
        row![
            widgets::rating(cs, display::display_rating(record)),
            widgets::status_badge(cs, record.status, lang),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
        row![
            button(
                text(i18n::label(lang, Label::Favorite))
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            )
            .padding([style::SPACE_XS, style::SPACE_LG])
            .on_press(Message::Favorite)
            .style(theme::outlined_primary_button(cs)),
            button(
                lucide_icons::iced::icon_copy()
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface_variant),
            )
            .padding(style::SPACE_SM)
            .on_press(Message::CopyTitle)
            .style(theme::icon_button(cs)),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    ]
    .spacing(style::SPACE_SM)
    .width(Length::Fill);

    if title_copied {
        title_block = title_block.push(
            text(i18n::label(lang, Label::TitleCopied))
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    let header = row![
        widgets::cover(
            cs,
            covers,
            &image_url,
            Length::Fixed(style::HERO_COVER_WIDTH),
            style::HERO_COVER_HEIGHT,
            style::RADIUS_MD,
        ),
        title_block,
    ]
    .spacing(style::SPACE_LG)
    .align_y(Alignment::End);

    let genres: Vec<Element<'a, Message>> = display::display_genres(record)
        .into_iter()
        .map(|genre| {
            container(
                text(genre)
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding([style::SPACE_XXS, style::SPACE_MD])
            .style(theme::metadata_badge(cs))
            .into()
        })
        .collect();
    let genre_wrap = iced_aw::Wrap::with_elements(genres)
        .spacing(style::SPACE_XS)
        .line_spacing(style::SPACE_XS);

    let synopsis = display::display_synopsis(record)
        .unwrap_or_else(|| i18n::label(lang, Label::NoSynopsis));

    let chapters: Vec<Element<'a, Message>> = display::placeholder_chapters()
        .into_iter()
        .map(|chapter| chapter_row(cs, covers, &image_url, chapter))
        .collect();

    let content = column![
        back,
        header,
        genre_wrap,
        section_heading(cs, i18n::label(lang, Label::Overview)),
        text(synopsis)
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
        section_heading(cs, i18n::label(lang, Label::Chapters)),
        column(chapters).spacing(style::SPACE_MD),
    ]
    .spacing(style::SPACE_LG)
    .padding([style::SPACE_LG, style::SPACE_XL])
    .max_width(style::DETAIL_MAX_WIDTH);

    widgets::styled_scrollable(container(content).center_x(Length::Fill), cs)
        .height(Length::Fill)
        .into()
}

fn section_heading<'a>(cs: &ColorScheme, label: &'static str) -> Element<'a, Message> {
    text(label)
        .size(style::TEXT_LG)
        .font(style::FONT_HEADING)
        .color(cs.on_surface)
        .line_height(style::LINE_HEIGHT_TIGHT)
        .into()
}

/// One decorative chapter row: cover thumbnail, gold number, name.
fn chapter_row<'a>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    image_url: &str,
    chapter: PlaceholderChapter,
) -> Element<'a, Message> {
    let thumb = widgets::cover(
        cs,
        covers,
        image_url,
        Length::Fixed(style::CHAPTER_THUMB_WIDTH),
        style::CHAPTER_ROW_HEIGHT - 2.0 * style::SPACE_SM,
        style::RADIUS_SM,
    );

    let labels = column![
        text(chapter.label)
            .size(style::TEXT_XL)
            .font(style::FONT_DISPLAY)
            .color(cs.tertiary)
            .line_height(style::LINE_HEIGHT_TIGHT),
        text(chapter.name)
            .size(style::TEXT_SM)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .width(Length::Fill);

    let read = button(
        container(
            lucide_icons::iced::icon_play()
                .size(style::ICON_SIZE)
                .color(cs.on_surface),
        )
        .center(Length::Fill),
    )
    .width(Length::Fixed(style::ICON_BUTTON_SIZE))
    .height(Length::Fixed(style::ICON_BUTTON_SIZE))
    .padding(0)
    .on_press(Message::ReadChapter(chapter.number))
    .style(theme::round_button(cs));

    container(
        row![thumb, labels, read]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center),
    )
    .padding([style::SPACE_SM, style::SPACE_MD])
    .height(Length::Fixed(style::CHAPTER_ROW_HEIGHT))
    .width(Length::Fill)
    .style(theme::chapter_row(cs))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_maps_to_session_back() {
        assert!(matches!(
            update(Message::Back),
            Action::Browse(BrowseEvent::Back)
        ));
    }

    #[test]
    fn test_decorative_controls_do_nothing() {
        assert!(matches!(update(Message::Favorite), Action::None));
        assert!(matches!(update(Message::ReadChapter(3)), Action::None));
    }
}
