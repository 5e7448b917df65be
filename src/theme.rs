use ratatui::style::{Color, Modifier, Style};

/// Base colors the styles below are built from.
mod palette {
    use ratatui::style::Color;

    pub const INK: Color = Color::Rgb(24, 26, 31);
    pub const PANEL: Color = Color::Rgb(36, 39, 46);
    pub const RULE: Color = Color::Rgb(72, 77, 88);
    pub const MUTED: Color = Color::Rgb(128, 134, 148);
    pub const TEXT: Color = Color::Rgb(214, 218, 226);
    pub const BRIGHT: Color = Color::Rgb(240, 242, 246);

    pub const ACCENT: Color = Color::Rgb(232, 153, 62);
    pub const GO: Color = Color::Rgb(120, 190, 110);
    pub const GO_HOT: Color = Color::Rgb(160, 222, 140);
    pub const INFO: Color = Color::Rgb(110, 170, 230);
    pub const TAG: Color = Color::Rgb(190, 140, 220);
    pub const WARN: Color = Color::Rgb(236, 200, 90);
    pub const FAIL: Color = Color::Rgb(230, 95, 90);
}

use palette::{
    ACCENT, FAIL, GO, GO_HOT, INFO, INK, MUTED, PANEL, RULE, TAG, TEXT, WARN,
};

fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

/// Dark text on a colored chip.
fn chip(bg: Color) -> Style {
    Style::new()
        .fg(INK)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header_warn: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub reply_meta: Style,
    pub reply_text: Style,
    pub button: Style,
    pub button_selected: Style,

    pub table_header: Style,
    pub category: Style,

    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: fg(RULE),
            border_focus: fg(ACCENT),

            header_logo: chip(ACCENT),
            header: Style::new().fg(TEXT).bg(PANEL),
            header_item: bold(INFO),
            header_active: chip(ACCENT),
            header_warn: bold(WARN),

            footer: Style::new().fg(MUTED).bg(INK),
            footer_segment_key: bold(ACCENT),
            footer_segment_val: fg(palette::BRIGHT),

            reply_meta: fg(MUTED).add_modifier(Modifier::ITALIC),
            reply_text: fg(TEXT),
            button: chip(GO),
            button_selected: chip(GO_HOT).add_modifier(Modifier::UNDERLINED),

            table_header: bold(INFO).add_modifier(Modifier::UNDERLINED),
            category: fg(TAG),

            status_info: fg(GO),
            status_warn: fg(WARN),
            status_error: bold(FAIL),

            list_selected: bold(palette::BRIGHT).bg(PANEL),
            list_item: fg(TEXT),
            dimmed: Style::new().add_modifier(Modifier::DIM),
        }
    }
}
