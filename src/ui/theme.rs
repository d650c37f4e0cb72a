use ratatui::style::Color;

pub const KOFU_ORANGE: Color = Color::Rgb(0xb3, 0x70, 0x24);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

pub const BODY_TEXT: Color = Color::Rgb(0xf9, 0xf9, 0xf9);
pub const MUTED_TEXT: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const HEADING_TEXT: Color = Color::Rgb(0xb3, 0x70, 0x24);
pub const LINK_TEXT: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const CODE_TEXT: Color = Color::Rgb(0xa6, 0xe3, 0xa1);

pub const TAG_BG: Color = Color::Rgb(0xff, 0xc1, 0x07);
pub const TAG_FG: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const USERNAME_TEXT: Color = Color::Rgb(0xf3, 0x21, 0x70);
pub const ADMIN_TAGS: Color = Color::Rgb(0x19, 0x91, 0xa1);
pub const PLAIN_TAGS: Color = Color::Rgb(0x99, 0x99, 0x99);

pub const COMMENT_ACTION: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const LIKE_ACTION: Color = Color::Rgb(0xff, 0x6b, 0x6b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
