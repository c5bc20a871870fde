// src/core/color.rs

use colored::Color;

/// Parses a color name from the settings file (e.g. "red", "bright-cyan") into a
/// terminal color. Returns `None` for unknown names.
pub fn parse_color_name(name: &str) -> Option<Color> {
    let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");
    let color = match normalized.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright-black" => Color::BrightBlack,
        "bright-red" => Color::BrightRed,
        "bright-green" => Color::BrightGreen,
        "bright-yellow" => Color::BrightYellow,
        "bright-blue" => Color::BrightBlue,
        "bright-magenta" => Color::BrightMagenta,
        "bright-cyan" => Color::BrightCyan,
        "bright-white" => Color::BrightWhite,
        _ => return None,
    };
    Some(color)
}
