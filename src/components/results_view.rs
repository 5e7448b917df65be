use crate::app::state::ResultsState;
use crate::domain::models::SkillOutput;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

pub struct ResultsView<'a> {
    pub results: &'a ResultsState,
    pub theme: &'a Theme,
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let Some(result) = self.results.shown() else {
            let msg = if self.results.pending.is_empty() {
                "  Skill results show up here."
            } else {
                "  Working..."
            };
            Paragraph::new(vec![Line::from(""), Line::from(Span::styled(msg, theme.dimmed))])
                .render(area, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let param = if result.param.is_empty() {
            String::new()
        } else {
            format!(" \"{}\"", result.param)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {}", result.skill.label()), theme.header_item),
            Span::styled(param, theme.reply_text),
            Span::styled(
                format!("  {}", result.finished_at.format("%H:%M:%S")),
                theme.reply_meta,
            ),
        ]))
        .render(chunks[0], buf);

        let body = chunks[1];
        match &result.output {
            SkillOutput::Table {
                title,
                columns,
                rows,
            } => {
                if rows.is_empty() {
                    Paragraph::new(Line::from(Span::styled(
                        format!("  No matches in {title}."),
                        theme.dimmed,
                    )))
                    .render(body, buf);
                    return;
                }

                let header = Row::new(
                    columns
                        .iter()
                        .map(|c| Cell::from(Span::styled(c.clone(), theme.table_header))),
                );
                let widths = vec![Constraint::Ratio(1, columns.len().max(1) as u32); columns.len()];
                let visible: Vec<Row> = rows
                    .iter()
                    .skip(self.results.scroll as usize)
                    .map(|r| Row::new(r.iter().map(|v| Cell::from(v.clone()))).style(theme.list_item))
                    .collect();

                Table::new(visible, widths)
                    .header(header)
                    .column_spacing(1)
                    .render(body, buf);
            }
            SkillOutput::File(path) => {
                Paragraph::new(vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("  Wrote ", theme.reply_text),
                        Span::styled(path.display().to_string(), theme.footer_segment_key),
                    ]),
                ])
                .render(body, buf);
            }
            SkillOutput::Booking { topic, url } => {
                Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(format!("  Meeting: {topic}"), theme.reply_text)),
                    Line::from(Span::styled(format!("  {url}"), theme.footer_segment_key)),
                ])
                .render(body, buf);
            }
        }
    }
}
