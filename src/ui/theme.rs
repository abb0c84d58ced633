use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x28, 0x74, 0xf0);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const PRICE_TEXT: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const RATING_BADGE: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const SKELETON: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
