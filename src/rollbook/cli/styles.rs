use colored::{Color, Colorize};
use rollbook::api::MessageLevel;
use rollbook::model::ThemePreference;

/// Colours used by the renderers; the accent follows the stored theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub heading: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self {
                accent: Color::Blue,
                heading: Color::Black,
                muted: Color::BrightBlack,
            },
            ThemePreference::Dark => Self {
                accent: Color::BrightCyan,
                heading: Color::BrightWhite,
                muted: Color::White,
            },
        }
    }
}

pub fn message_color(level: &MessageLevel) -> Option<Color> {
    match level {
        MessageLevel::Info => None,
        MessageLevel::Success => Some(Color::Green),
        MessageLevel::Warning => Some(Color::Yellow),
        MessageLevel::Error => Some(Color::Red),
    }
}

/// Applies `color` (and optionally bold) when `use_color` is set.
pub fn paint(text: &str, color: Option<Color>, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let mut styled = match color {
        Some(color) => text.color(color),
        None => text.normal(),
    };
    if bold {
        styled = styled.bold();
    }
    styled.to_string()
}
