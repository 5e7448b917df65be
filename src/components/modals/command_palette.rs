use crate::app::state::PaletteViewModel;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::helpers::{centered_rect, list_offset, open_modal};

/// Where each part of the palette sits on screen. Shared by rendering and
/// mouse hit-testing so clicks land on the row that was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub list: Rect,
    pub hint: Rect,
}

#[must_use]
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let modal = centered_rect(60, 50, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    PaletteLayout {
        modal,
        query: rows[0],
        list: rows[2],
        hint: rows[3],
    }
}

/// Maps a click at (`column`, `row`) to an index into the filtered list.
#[must_use]
pub fn row_at(layout: &PaletteLayout, view: &PaletteViewModel, column: u16, row: u16) -> Option<usize> {
    if !super::helpers::contains(layout.list, column, row) {
        return None;
    }
    let offset = list_offset(view.selected_index, layout.list.height as usize);
    let idx = offset + (row - layout.list.y) as usize;
    (idx < view.rows.len()).then_some(idx)
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub query: &'a str,
    pub view: &'a PaletteViewModel,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        open_modal(buf, layout.modal, area, " COMMAND PALETTE ", self.theme)
            .render(layout.modal, buf);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(self.query, self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        let separator_y = layout.query.y + 1;
        if separator_y < layout.list.y {
            let separator = "─".repeat(layout.query.width as usize);
            buf.set_string(layout.query.x, separator_y, separator, self.theme.border_focus);
        }

        if self.view.rows.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No commands found.",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(layout.list.x, layout.list.y, &no_results, layout.list.width);
        } else {
            let visible = layout.list.height as usize;
            let offset = list_offset(self.view.selected_index, visible);
            for (line_no, (i, row)) in self
                .view
                .rows
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .enumerate()
            {
                let selected = i == self.view.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };
                let suffix = if row.navigates { " →" } else { "" };

                let line = Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{} ", row.icon), style),
                    Span::styled(format!("{:<18}", row.label), style),
                    Span::styled(format!("{:<9}", row.category.label()), self.theme.category),
                    Span::styled(
                        format!("{}{suffix}", row.description),
                        self.theme.list_item.add_modifier(Modifier::DIM),
                    ),
                ]);
                buf.set_line(
                    layout.list.x,
                    layout.list.y + line_no as u16,
                    &line,
                    layout.list.width,
                );
            }
        }

        if let Some(hint) = &self.view.hint {
            let hint_line = Line::from(Span::styled(format!(" {hint}"), self.theme.reply_meta));
            buf.set_line(layout.hint.x, layout.hint.y, &hint_line, layout.hint.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command_palette::get_commands;
    use crate::app::state::CommandPalette;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_query_rows_and_hint() {
        let mut view = PaletteViewModel::default();
        let mut palette = CommandPalette::open(get_commands().into(), 1, &mut view);
        palette.set_query("export", &mut view);
        view.hint = Some("3 projects · 1 customers".to_string());

        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        CommandPaletteModal {
            theme: &Theme::default(),
            query: palette.query(),
            view: &view,
        }
        .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("COMMAND PALETTE"));
        assert!(text.contains("> export"));
        assert!(text.contains("Export Projects"));
        assert!(text.contains("Export Customers"));
        assert!(!text.contains("Search Projects"));
        assert!(text.contains("3 projects"));
    }

    #[test]
    fn test_empty_list_message() {
        let view = PaletteViewModel {
            visible: true,
            ..Default::default()
        };
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        CommandPaletteModal {
            theme: &Theme::default(),
            query: "zzz",
            view: &view,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No commands found."));
    }

    #[test]
    fn test_row_hit_testing() {
        let mut view = PaletteViewModel::default();
        let _palette = CommandPalette::open(get_commands().into(), 1, &mut view);
        let layout = palette_layout(Rect::new(0, 0, 100, 30));

        assert_eq!(row_at(&layout, &view, layout.list.x, layout.list.y), Some(0));
        assert_eq!(
            row_at(&layout, &view, layout.list.x + 3, layout.list.y + 2),
            Some(2)
        );
        assert_eq!(row_at(&layout, &view, layout.query.x, layout.query.y), None);
        assert_eq!(row_at(&layout, &view, 0, 0), None);
    }
}
