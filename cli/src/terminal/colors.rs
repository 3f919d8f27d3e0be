use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const AVAILABLE: Color = Color::Green;
pub const OCCUPIED: Color = Color::Red;
pub const DATE: Color = Color::Yellow;
