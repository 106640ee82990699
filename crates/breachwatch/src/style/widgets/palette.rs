//! Color palette with light and dark theme support.
//!
//! The result colors carry meaning: green for a clean address, red for
//! breach warnings, yellow/amber for lookup failures. Failure and breach
//! colors stay distinct in both themes.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default, matching the tool's security-console look).
    #[default]
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary brand color.
    pub primary: Color,
    /// Lighter primary, used for hover states.
    pub primary_light: Color,
    /// Darker primary, used for pressed states.
    pub primary_dark: Color,

    /// Card/panel surface.
    pub surface: Color,
    /// Elevated surface (inputs, raised cards).
    pub surface_elevated: Color,
    /// Window background.
    pub background: Color,
    /// Secondary background (disabled inputs).
    pub background_secondary: Color,

    /// Main text.
    pub text_primary: Color,
    /// Muted text (labels, subtitles).
    pub text_secondary: Color,
    /// Faintest text (placeholders, footer).
    pub text_muted: Color,
    /// Text rendered on the primary color.
    pub text_on_primary: Color,

    /// Clean/safe result.
    pub accent_green: Color,
    /// Lookup failure warning.
    pub accent_yellow: Color,
    /// Breach warning.
    pub accent_red: Color,

    /// Hover background.
    pub hover: Color,
    /// Selection background.
    pub selected: Color,

    /// Subtle border.
    pub border_subtle: Color,
    /// Medium border.
    pub border_medium: Color,

    /// Soft shadow color.
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 0.48, 0.95),
            primary_light: Color::from_rgb(0.35, 0.65, 1.0),
            primary_dark: Color::from_rgb(0.0, 0.38, 0.80),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(1.0, 1.0, 1.0),
            background: Color::from_rgb(0.98, 0.985, 0.99),
            background_secondary: Color::from_rgb(0.96, 0.965, 0.98),

            text_primary: Color::from_rgb(0.08, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.18, 0.70, 0.40),
            accent_yellow: Color::from_rgb(0.90, 0.62, 0.05),
            accent_red: Color::from_rgb(0.88, 0.24, 0.30),

            hover: Color::from_rgb(0.97, 0.98, 0.99),
            selected: Color::from_rgb(0.94, 0.97, 1.0),

            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.20, 0.60, 1.0),
            primary_light: Color::from_rgb(0.40, 0.72, 1.0),
            primary_dark: Color::from_rgb(0.12, 0.46, 0.85),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            background: Color::from_rgb(0.08, 0.09, 0.11),
            background_secondary: Color::from_rgb(0.10, 0.11, 0.13),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.05, 0.06, 0.08),

            accent_green: Color::from_rgb(0.18, 0.80, 0.44),
            accent_yellow: Color::from_rgb(0.95, 0.76, 0.07),
            accent_red: Color::from_rgb(0.91, 0.30, 0.24),

            hover: Color::from_rgb(0.14, 0.15, 0.17),
            selected: Color::from_rgb(0.12, 0.18, 0.24),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette.
static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
