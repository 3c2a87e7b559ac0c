use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEART: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SPINNER: Color = Color::Rgb(0x62, 0x00, 0xee);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Follow button pulse while not following.
pub const FOLLOW_PULSE: ([u8; 3], [u8; 3]) = ([0x03, 0x3b, 0xc8], [0xfb, 0x02, 0xb7]);
/// Follow button pulse while following.
pub const UNFOLLOW_PULSE: ([u8; 3], [u8; 3]) = ([0x3f, 0xf5, 0xff], [0xd7, 0xff, 0x3f]);

pub fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
