use ratatui::style::{Color, Modifier, Style};

const GREEN: Color = Color::Rgb(0x73, 0xF5, 0x9F);
const RED: Color = Color::Rgb(0xF2, 0x5D, 0x94);
const PURPLE: Color = Color::Rgb(0x87, 0x4B, 0xFD);
const YELLOW: Color = Color::Rgb(0xFD, 0xE6, 0x8A);
const GRAY_50: Color = Color::Rgb(0xFF, 0xF7, 0xDB);
const SUBTLE: Color = Color::Rgb(0x38, 0x38, 0x38);

pub const RADIO_ON: &str = "(●)";
pub const RADIO_OFF: &str = "(o)";
pub const CHECK_ON: &str = "[✓]";
pub const CHECK_OFF: &str = "[ ]";

/// Styles for one frame; built fresh by every render
#[derive(Debug, Clone)]
pub struct Theme {
    pub banner: Style,
    pub banner_border: Style,
    pub rule: Style,
    pub header: Style,
    pub item: Style,
    pub active_item: Style,
    pub block: Style,
    pub active_block: Style,
    pub block_title: Style,
    pub footer: Style,
    pub help_key: Style,
    pub help_desc: Style,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            banner: Style::new().fg(YELLOW),
            banner_border: Style::new().fg(PURPLE),
            rule: Style::new().fg(SUBTLE),
            header: Style::new().fg(GRAY_50).bg(PURPLE).add_modifier(Modifier::BOLD),
            item: Style::new(),
            active_item: Style::new().fg(RED),
            block: Style::new().fg(SUBTLE),
            active_block: Style::new().fg(GREEN),
            block_title: Style::new().fg(YELLOW),
            footer: Style::new().fg(YELLOW).bg(SUBTLE).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(Color::Gray),
            help_desc: Style::new().fg(Color::DarkGray),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
