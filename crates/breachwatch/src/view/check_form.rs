//! Email input form view.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::CheckState;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Renders the email input card: label, input field, inline validation
/// error, and the check button.
pub fn view_check_form(state: &CheckState) -> Element<'_, Message> {
    let p = palette::current();

    let label = text("Enter your email address:")
        .size(14)
        .color(p.text_secondary);

    let input = text_input("example@email.com", &state.email_input)
        .on_input(Message::EmailChanged)
        .on_submit(Message::CheckRequested)
        .padding(12)
        .size(14)
        .style(widgets::email_input_style);

    let mut form = column![label, input].spacing(8);

    // Validation errors render inline, under the field they relate to
    if let Some(error) = &state.input_error {
        form = form.push(text(error).size(12).color(p.accent_red));
    }

    let check_btn = button(
        text(if state.is_checking {
            "Checking..."
        } else {
            "Check for Breaches"
        })
        .size(15),
    )
    .on_press_maybe(if state.is_checking {
        // A check is outstanding; further submissions are ignored
        None
    } else {
        Some(Message::CheckRequested)
    })
    .padding([12, 24])
    .style(widgets::primary_button_style);

    let content = column![form, Space::new().height(8), check_btn]
        .spacing(8)
        .align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(24)
        .style(widgets::card_style)
        .into()
}
