//! Result panel view.

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Element, Length};

use breachwatch_core::{BreachRecord, LookupFailure, LookupResult};

use crate::message::Message;
use crate::model::CheckState;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Renders the result panel for the current check state.
pub fn view_report(state: &CheckState) -> Element<'_, Message> {
    let body: Element<'_, Message> = if state.is_checking {
        view_pending()
    } else {
        match &state.last_result {
            None => view_prompt(),
            Some(LookupResult::Clean) => view_clean(),
            Some(LookupResult::Breached { sources }) => view_breached(sources),
            Some(LookupResult::Failed(failure)) => view_failure(*failure),
        }
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .style(widgets::card_style)
        .into()
}

fn view_prompt() -> Element<'static, Message> {
    let p = palette::current();
    text("Enter an email address and press \u{201C}Check for Breaches\u{201D}")
        .size(15)
        .color(p.text_muted)
        .into()
}

fn view_pending() -> Element<'static, Message> {
    let p = palette::current();
    text("Checking against known breaches...")
        .size(15)
        .color(p.text_secondary)
        .into()
}

fn view_clean() -> Element<'static, Message> {
    let p = palette::current();
    column![
        text("\u{2705} Safe! No breaches found.")
            .size(17)
            .color(p.accent_green),
        text("This email was not found in any known data breach.")
            .size(13)
            .color(p.accent_green),
    ]
    .spacing(6)
    .into()
}

/// Breach list: red status line, count, and a scrollable numbered list of
/// sources in upstream order.
fn view_breached(sources: &[BreachRecord]) -> Element<'_, Message> {
    let p = palette::current();

    let status = text("\u{26A0} Warning! Breaches found.")
        .size(17)
        .color(p.accent_red);

    let count = text(format!(
        "This email was found in {} data breach(es):",
        sources.len()
    ))
    .size(13)
    .color(p.accent_red);

    let rows = sources
        .iter()
        .enumerate()
        .fold(Column::new().spacing(6), |col, (index, source)| {
            col.push(view_source_row(index + 1, source.name()))
        });

    let list = scrollable(rows.padding([0, 8]))
        .height(Length::Fill)
        .style(widgets::scrollable_style);

    column![status, count, list].spacing(12).into()
}

fn view_source_row(number: usize, name: &str) -> Element<'_, Message> {
    let p = palette::current();
    container(
        row![
            text(format!("{number}.")).size(13).color(p.text_muted),
            text(name).size(14).color(p.accent_red),
        ]
        .spacing(10),
    )
    .width(Length::Fill)
    .padding([8, 12])
    .style(widgets::report_row_style)
    .into()
}

/// Lookup failures use the warning color, not the breach color, so a
/// service problem never reads as a positive result.
fn view_failure(failure: LookupFailure) -> Element<'static, Message> {
    let p = palette::current();
    column![
        text("\u{274C} Check could not complete")
            .size(17)
            .color(p.accent_yellow),
        text(failure.to_string()).size(13).color(p.accent_yellow),
    ]
    .spacing(6)
    .into()
}
