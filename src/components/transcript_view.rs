use crate::domain::models::TranscriptEntry;
use crate::domain::skill::SkillName;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct TranscriptView<'a> {
    pub entries: &'a [TranscriptEntry],
    /// Focused button on the selected entry.
    pub button: usize,
    pub theme: &'a Theme,
}

/// Greedy word wrap on display columns. Existing newlines are kept.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in raw.split_whitespace() {
            let word_len = word.chars().count();
            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
        lines.push(current);
    }
    lines
}

fn button_label(skill: SkillName, param: &str) -> String {
    if param.is_empty() {
        format!(" {} ", skill.label())
    } else {
        format!(" {}: {param} ", skill.label())
    }
}

impl TranscriptView<'_> {
    fn entry_item(&self, entry: &TranscriptEntry, width: usize, selected: bool) -> ListItem<'static> {
        let theme = self.theme;
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("#{} ", entry.id + 1), theme.header_item),
            Span::styled(entry.received_at.format("%H:%M:%S").to_string(), theme.reply_meta),
        ])];

        for line in wrap_text(entry.cleaned_text.trim_end(), width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(format!("  {line}"), theme.reply_text)));
        }

        let ran: Vec<String> = entry
            .triggers
            .iter()
            .filter(|t| {
                !entry
                    .affordances
                    .iter()
                    .any(|(skill, param)| skill.tag() == t.skill_name && *param == t.param)
            })
            .map(|t| {
                if t.param.is_empty() {
                    t.skill_name.clone()
                } else {
                    format!("{}({})", t.skill_name, t.param)
                }
            })
            .collect();
        if !ran.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  ⚡ {}", ran.join(", ")),
                theme.dimmed,
            )));
        }

        if !entry.affordances.is_empty() {
            let mut spans = vec![Span::raw("  ")];
            for (i, (skill, param)) in entry.affordances.iter().enumerate() {
                let style = if selected && i == self.button {
                    theme.button_selected
                } else {
                    theme.button
                };
                spans.push(Span::styled(button_label(*skill, param), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        ListItem::new(lines)
    }
}

impl StatefulWidget for TranscriptView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.entries.is_empty() {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No replies yet. Press p to paste one, or watch a transcript file.",
                    self.theme.dimmed,
                )),
            ])
            .render(area, buf);
            return;
        }

        let selected = state.selected();
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.entry_item(entry, area.width as usize, selected == Some(i)))
            .collect();

        StatefulWidget::render(
            List::new(items).highlight_style(self.theme.list_selected.remove_modifier(ratatui::style::Modifier::BOLD)),
            area,
            buf,
            state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
        assert_eq!(wrap_text("unbreakableword", 4), vec!["unbreakableword"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_button_label() {
        assert_eq!(
            button_label(SkillName::BookMeeting, "intro"),
            " Book a meeting: intro "
        );
        assert_eq!(button_label(SkillName::BookMeeting, ""), " Book a meeting ");
    }
}
