//! Theme system for Wortschatz.
//!
//! Provides preset color schemes that can be selected by the user.

use ratatui::style::Color;

/// A color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier for the theme.
    pub id: &'static str,
    /// Display name for the theme.
    pub name: &'static str,

    // Semantic colors
    /// Primary color for selected options, the revealed card back, action keys.
    pub primary: Color,
    /// Secondary color for titles and the category badge.
    pub secondary: Color,
    /// Normal text content.
    pub text: Color,
    /// Dimmed text for hints, counters, inactive options.
    pub dimmed: Color,
    /// Correct answers and the streak display.
    pub success: Color,
    /// Wrong answers.
    pub error: Color,
    /// Border of the flashcard and quiz panels.
    pub card_border: Color,
}

/// Default theme - plain terminal colors.
pub const DEFAULT: Theme = Theme {
    id: "default",
    name: "Default",
    primary: Color::Yellow,
    secondary: Color::Cyan,
    text: Color::White,
    dimmed: Color::DarkGray,
    success: Color::Green,
    error: Color::Red,
    card_border: Color::White,
};

/// Dark theme - muted tones for dark terminal backgrounds.
pub const DARK: Theme = Theme {
    id: "dark",
    name: "Dark",
    primary: Color::Rgb(250, 189, 47),   // Amber
    secondary: Color::Rgb(131, 165, 152), // Faded aqua
    text: Color::Rgb(235, 219, 178),      // Cream
    dimmed: Color::Rgb(124, 111, 100),    // Warm gray
    success: Color::Rgb(152, 195, 121),   // Soft green
    error: Color::Rgb(224, 108, 117),     // Soft red
    card_border: Color::Rgb(168, 153, 132), // Tan
};

/// Light theme - darker tones for light terminal backgrounds.
pub const LIGHT: Theme = Theme {
    id: "light",
    name: "Light",
    primary: Color::Rgb(175, 95, 0),     // Burnt orange
    secondary: Color::Rgb(0, 95, 135),   // Deep teal
    text: Color::Rgb(40, 40, 40),        // Near black
    dimmed: Color::Rgb(120, 120, 120),   // Gray
    success: Color::Rgb(0, 135, 0),      // Green
    error: Color::Rgb(175, 0, 0),        // Dark red
    card_border: Color::Rgb(80, 80, 80), // Charcoal
};

/// Sepia theme - paper-like palette for long study sessions.
pub const SEPIA: Theme = Theme {
    id: "sepia",
    name: "Sepia",
    primary: Color::Rgb(193, 125, 17),   // Ochre
    secondary: Color::Rgb(121, 116, 14), // Olive
    text: Color::Rgb(92, 75, 55),        // Sepia brown
    dimmed: Color::Rgb(146, 131, 116),   // Faded brown
    success: Color::Rgb(96, 128, 63),    // Moss green
    error: Color::Rgb(157, 66, 44),      // Brick
    card_border: Color::Rgb(124, 103, 76), // Umber
};

impl Theme {
    /// All available themes.
    pub const ALL: [Theme; 4] = [DEFAULT, DARK, LIGHT, SEPIA];

    /// Look up a theme by its ID.
    ///
    /// Returns the DEFAULT theme if the ID is not found.
    pub fn by_id(id: &str) -> &'static Theme {
        Theme::ALL.iter().find(|t| t.id == id).unwrap_or(&DEFAULT)
    }
}
