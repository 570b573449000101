use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::cover_cache::{CoverCache, CoverState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Render a cover image with rounded corners, or a styled placeholder.
///
/// Uses `ContentFit::Cover` so the image fills the frame, cropping any
/// overflow. The container always carries the placeholder background so a
/// failed or blank URL still shows a visible frame.
pub fn cover<'a, Message: 'static>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    url: &str,
    width: Length,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(CoverState::Loaded(handle)) = covers.get(url) {
        container(
            iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(width)
        .height(Length::Fixed(height))
        .style(theme::cover_placeholder(cs, radius))
        .into()
    } else {
        let icon_size = if height < style::ROW_COVER_HEIGHT {
            style::TEXT_BASE
        } else {
            style::TEXT_2XL
        };
        container(
            lucide_icons::iced::icon_book_open()
                .size(icon_size)
                .color(cs.outline)
                .center(),
        )
        .width(width)
        .height(Length::Fixed(height))
        .center_x(width)
        .center_y(Length::Fixed(height))
        .style(theme::cover_placeholder(cs, radius))
        .into()
    }
}
