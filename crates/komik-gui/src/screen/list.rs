use iced::widget::{button, center, column, container, row, rule, text, text_input};
use iced::{Alignment, Element, Length};

use komik_core::display;
use komik_core::filter::{GenreFilter, GENRES};
use komik_core::i18n::{self, Label, Language};
use komik_core::session::{BrowseEvent, BrowseSession};

use crate::cover_cache::CoverCache;
use crate::screen::{Action, Orientation};
use crate::style;
use crate::theme::{self, ColorScheme, ThemeMode};
use crate::widgets;

/// Messages handled by the list screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleSearch,
    QueryChanged(String),
    GenreSelected(&'static str),
    /// Open the title at this position in the visible list.
    Open(usize),
    ToggleTheme,
    ToggleLanguage,
}

pub fn update(msg: Message) -> Action {
    match msg {
        Message::ToggleSearch => Action::Browse(BrowseEvent::ToggleSearch),
        Message::QueryChanged(query) => Action::Browse(BrowseEvent::QueryChanged(query)),
        Message::GenreSelected(label) => {
            Action::Browse(BrowseEvent::GenreSelected(GenreFilter::from_label(label)))
        }
        Message::Open(position) => Action::Browse(BrowseEvent::Select(position)),
        Message::ToggleTheme => Action::ToggleTheme,
        Message::ToggleLanguage => Action::ToggleLanguage,
    }
}

/// Render-time inputs that live outside the session.
pub struct ListView<'a> {
    pub cs: &'a ColorScheme,
    pub covers: &'a CoverCache,
    pub cover_base: &'a str,
    pub lang: Language,
    pub mode: ThemeMode,
    pub orientation: Orientation,
}

pub fn view<'a>(session: &'a BrowseSession, ctx: ListView<'a>) -> Element<'a, Message> {
    let cs = ctx.cs;

    let body: Element<'a, Message> = if session.is_loading() {
        center(
            column![
                lucide_icons::iced::icon_loader()
                    .size(style::TEXT_2XL)
                    .color(cs.primary),
                text(i18n::label(ctx.lang, Label::Loading))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_SM)
            .align_x(Alignment::Center),
        )
        .into()
    } else if session.visible_len() == 0 {
        widgets::empty_state(cs, ctx.lang, session.query(), session.genre())
    } else {
        match ctx.orientation {
            Orientation::Landscape => landscape_list(session, &ctx),
            Orientation::Portrait => portrait_grid(session, &ctx),
        }
    };

    column![
        top_bar(session, &ctx),
        genre_bar(cs, session.genre()),
        rule::horizontal(1),
        body
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn top_bar<'a>(session: &'a BrowseSession, ctx: &ListView<'a>) -> Element<'a, Message> {
    let cs = ctx.cs;

    let lead: Element<'a, Message> = if session.is_searching() {
        container(
            text_input(i18n::label(ctx.lang, Label::SearchPlaceholder), session.query())
                .on_input(Message::QueryChanged)
                .size(style::TEXT_BASE)
                .padding([style::SPACE_SM, style::SPACE_LG])
                .style(theme::text_input_borderless(cs)),
        )
        .width(Length::Fill)
        .style(theme::search_bar(cs))
        .into()
    } else {
        text(i18n::label(ctx.lang, Label::AppTitle))
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT)
            .width(Length::Fill)
            .into()
    };

    let search_icon = if session.is_searching() {
        lucide_icons::iced::icon_x()
    } else {
        lucide_icons::iced::icon_search()
    };
    let theme_icon = match ctx.mode {
        ThemeMode::Light => lucide_icons::iced::icon_moon(),
        _ => lucide_icons::iced::icon_sun(),
    };

    let bar = row![
        lead,
        icon_button(cs, search_icon, Message::ToggleSearch),
        icon_button(cs, lucide_icons::iced::icon_globe(), Message::ToggleLanguage),
        icon_button(cs, theme_icon, Message::ToggleTheme),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center)
    .padding([style::SPACE_SM, style::SPACE_LG]);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(style::TOP_BAR_HEIGHT))
        .center_y(Length::Fixed(style::TOP_BAR_HEIGHT))
        .style(theme::top_bar(cs))
        .into()
}

fn icon_button<'a>(
    cs: &ColorScheme,
    icon: iced::widget::Text<'static>,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        container(icon.size(style::ICON_SIZE).color(cs.on_surface_variant)).center(Length::Fill),
    )
    .width(Length::Fixed(style::ICON_BUTTON_SIZE))
    .height(Length::Fixed(style::ICON_BUTTON_SIZE))
    .padding(0)
    .on_press(on_press)
    .style(theme::icon_button(cs))
    .into()
}

/// Filter chip bar for the genre facets.
fn genre_bar(cs: &ColorScheme, active: &GenreFilter) -> Element<'static, Message> {
    let chips: Vec<Element<'static, Message>> = GENRES
        .iter()
        .map(|&genre| {
            let is_selected = active.label() == genre;
            let mut chip_content = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);
            if is_selected {
                chip_content =
                    chip_content.push(lucide_icons::iced::icon_check().size(style::TEXT_XS));
            }
            chip_content = chip_content.push(
                text(genre)
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );

            button(container(chip_content).center_y(Length::Fill))
                .height(Length::Fixed(style::CHIP_HEIGHT))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::GenreSelected(genre))
                .style(theme::filter_chip(is_selected, cs))
                .into()
        })
        .collect();

    let wrap = iced_aw::Wrap::with_elements(chips)
        .spacing(style::SPACE_XS)
        .line_spacing(style::SPACE_XS);

    container(wrap)
        .width(Length::Fill)
        .padding([style::SPACE_SM, style::SPACE_LG])
        .into()
}

fn landscape_list<'a>(session: &'a BrowseSession, ctx: &ListView<'a>) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = session
        .visible()
        .enumerate()
        .map(|(position, record)| {
            widgets::manga_row(
                ctx.cs,
                ctx.covers,
                record,
                &display::image_url_from(record, ctx.cover_base),
                ctx.lang,
                Message::Open(position),
            )
        })
        .collect();

    widgets::styled_scrollable(
        column(rows)
            .spacing(style::SPACE_MD)
            .padding(style::SPACE_LG),
        ctx.cs,
    )
    .height(Length::Fill)
    .into()
}

fn portrait_grid<'a>(session: &'a BrowseSession, ctx: &ListView<'a>) -> Element<'a, Message> {
    let mut cards = session.visible().enumerate().map(|(position, record)| {
        widgets::manga_card(
            ctx.cs,
            ctx.covers,
            record,
            &display::image_url_from(record, ctx.cover_base),
            ctx.lang,
            Message::Open(position),
        )
    });

    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    while let Some(left) = cards.next() {
        let right = cards.next().unwrap_or_else(|| column![].into());
        rows.push(
            row![
                container(left).width(Length::FillPortion(1)),
                container(right).width(Length::FillPortion(1)),
            ]
            .spacing(style::SPACE_MD)
            .into(),
        );
    }

    widgets::styled_scrollable(
        column(rows)
            .spacing(style::SPACE_MD)
            .padding(style::SPACE_MD),
        ctx.cs,
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_map_to_session_events() {
        assert!(matches!(
            update(Message::GenreSelected("All")),
            Action::Browse(BrowseEvent::GenreSelected(GenreFilter::All))
        ));
        assert!(matches!(
            update(Message::GenreSelected("Horror")),
            Action::Browse(BrowseEvent::GenreSelected(GenreFilter::Genre(ref g))) if g == "Horror"
        ));
        assert!(matches!(
            update(Message::Open(3)),
            Action::Browse(BrowseEvent::Select(3))
        ));
        assert!(matches!(update(Message::ToggleTheme), Action::ToggleTheme));
    }
}
