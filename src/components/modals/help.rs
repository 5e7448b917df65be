use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table, Widget},
};

use super::helpers::{centered_rect, open_modal};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Transcript",
        &[
            (" ↑ / ↓", "Select previous / next reply"),
            (" End", "Jump to the latest reply"),
            (" ← / →", "Pick a button on the reply"),
            (" Enter", "Press the picked button"),
            (" p", "Paste an assistant reply"),
            (" r", "Reload the transcript file"),
        ],
    ),
    (
        "Results",
        &[
            (" Tab", "Switch focus between panels"),
            (" PgUp / PgDn", "Scroll results"),
            (" [ / ]", "Older / newer result (← / → when focused)"),
            (" R", "Show / hide the results panel"),
        ],
    ),
    (
        "Commands",
        &[
            (" Ctrl+K / :", "Open the command palette"),
            (" type", "Filter by name, description or keyword"),
            (" ↑ / ↓", "Move the highlight"),
            (" Enter / click", "Run the highlighted command"),
            (" Esc", "Close without running anything"),
        ],
    ),
    (
        "General",
        &[
            (" ?", "Show this help"),
            (" Esc", "Close modal / Clear errors"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        let block = open_modal(buf, help_area, area, " HELP - KEYBINDINGS ", self.theme);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
