use ratatui::style::Color;

use crate::data::PlatformId;

pub const COLOR_VALUE: Color = Color::Reset;

/// The eight normal terminal colors, one swatch each.
pub const SWATCHES: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
];

/// Solid band drawn under the swatches, as wide as the whole row.
pub const COLOR_BAND: Color = Color::DarkGray;

pub fn accent_for(platform: PlatformId) -> Color {
    match platform {
        PlatformId::Windows => Color::Cyan,
        _ => Color::Green,
    }
}
