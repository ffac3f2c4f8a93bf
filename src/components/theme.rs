// ABOUTME: Shared color palette for the onboarding wizard and dashboard

use ratatui::style::Color;

pub const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub const HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
pub const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub const ERROR_RED: Color = Color::Rgb(220, 80, 80);
pub const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

/// Category colors for the response-type breakdown
pub const SERIES_COLORS: [Color; 4] = [
    Color::Rgb(0, 136, 254),
    Color::Rgb(0, 196, 159),
    Color::Rgb(255, 187, 40),
    Color::Rgb(255, 128, 66),
];
