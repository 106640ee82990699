//! `BreachWatch` - desktop data breach checker
//!
//! Takes an email address, checks it against the XposedOrNot breach API,
//! and shows the result. Built with Rust and the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::time::Duration;

use iced::widget::{column, container};
use iced::{Element, Length, Task};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use breachwatch_core::{EmailAddress, LookupClient, LookupResult};
use message::Message;
use model::CheckState;
use style::widgets::palette::{self, ThemeMode};

/// Deadline for a single lookup request.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "breachwatch=debug,breachwatch_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BreachWatch");

    iced::application(BreachWatch::new, BreachWatch::update, BreachWatch::view)
        .title("BreachWatch")
        .run()
}

/// Main application state.
///
/// Owned by the iced runtime and only ever touched from the UI thread;
/// the lookup task communicates back exclusively through [`Message`].
struct BreachWatch {
    /// State of the current/last check.
    check: CheckState,
    /// Shared HTTP client for lookups.
    lookup_client: LookupClient,
    /// Current theme mode.
    theme_mode: ThemeMode,
}

impl BreachWatch {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self {
            check: CheckState::new(),
            lookup_client: LookupClient::new(),
            theme_mode: ThemeMode::Dark,
        };
        palette::set_theme(app.theme_mode);
        (app, Task::none())
    }

    /// Update state based on message.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EmailChanged(input) => {
                self.check.email_input = input;
            }
            Message::CheckRequested => {
                if self.check.is_checking {
                    // One check at a time; the button is disabled, but the
                    // input's Enter handler can still fire
                    return Task::none();
                }
                if let Some(email) = self.check.validate_input() {
                    self.check.begin_check();
                    info!(email = %email, "starting breach check");
                    let client = self.lookup_client.clone();
                    return Task::perform(run_lookup(client, email), Message::CheckCompleted);
                }
            }
            Message::CheckCompleted(result) => {
                info!(?result, "breach check finished");
                self.check.finish_check(result);
            }
            Message::ToggleTheme => {
                self.theme_mode = match self.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                palette::set_theme(self.theme_mode);
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let body = column![
            view::view_check_form(&self.check),
            view::view_report(&self.check),
        ]
        .spacing(16)
        .max_width(680)
        .height(Length::Fill);

        let content = column![
            view::view_header(),
            container(body)
                .center_x(Length::Fill)
                .height(Length::Fill)
                .padding(20),
            view::view_footer(),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::widgets::window_style)
            .into()
    }
}

/// Run one lookup off the UI thread.
///
/// The result is delivered back into `update` as a message; if the window
/// closes first, the runtime discards it.
async fn run_lookup(client: LookupClient, email: EmailAddress) -> LookupResult {
    client.lookup(&email, LOOKUP_TIMEOUT).await
}
