//! Header and footer view components.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{header_style, palette, secondary_button_style};

/// Renders the application header: title, tagline, theme toggle.
pub fn view_header() -> Element<'static, Message> {
    let p = palette::current();

    let title = text("BreachWatch")
        .size(26)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.primary);

    let tagline = text("Check if your email has been exposed in data breaches")
        .size(13)
        .color(p.text_secondary);

    let theme_btn = button(text("\u{25D0}").size(18).color(p.text_secondary))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    let content = row![
        column![title, tagline].spacing(4),
        Space::new().width(Length::Fill),
        theme_btn,
    ]
    .padding([14, 20])
    .align_y(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}

/// Renders the footer credit line.
pub fn view_footer() -> Element<'static, Message> {
    let p = palette::current();

    container(
        text("Powered by the XposedOrNot API \u{2022} For educational purposes only")
            .size(11)
            .color(p.text_muted),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([10, 20])
    .into()
}
