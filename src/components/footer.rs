use crate::app::state::{AppMode, AppState, Panel};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One `key description` pair in the footer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct KeyHint {
    key: &'static str,
    desc: &'static str,
    lit: bool,
}

const fn hint(key: &'static str, desc: &'static str) -> KeyHint {
    KeyHint {
        key,
        desc,
        lit: false,
    }
}

impl KeyHint {
    fn width(&self) -> usize {
        // " key " + " desc " + gap
        self.key.chars().count() + self.desc.chars().count() + 5
    }
}

/// Hints for the current mode, most important first. The renderer drops
/// whatever does not fit.
fn hints(state: &AppState<'_>) -> Vec<KeyHint> {
    match state.mode {
        AppMode::Normal if state.last_error.is_some() => {
            vec![hint("Esc", "dismiss"), hint("Ctrl+K", "commands")]
        }
        AppMode::Normal => {
            let has_button = state
                .transcript
                .selected_entry()
                .is_some_and(|e| !e.affordances.is_empty());

            let mut out = vec![
                hint("Ctrl+K", "commands"),
                KeyHint {
                    lit: has_button,
                    ..hint("Enter", "button")
                },
                hint("p", "paste"),
                hint("↑/↓", "move"),
                hint("Tab", "focus"),
            ];
            if state.focused_panel == Panel::Results {
                out.extend([
                    hint("←/→", "older/newer"),
                    hint("PgUp/Dn", "scroll"),
                    hint("R", "hide"),
                ]);
            }
            out.extend([hint("?", "help"), hint("q", "quit")]);
            out
        }
        AppMode::CommandPalette => vec![
            hint("↑/↓", "select"),
            hint("Enter", "run"),
            hint("Esc", "close"),
        ],
        AppMode::Input => vec![hint("Enter", "submit"), hint("Esc", "cancel")],
        AppMode::Help | AppMode::Booking => vec![hint("Esc", "close")],
    }
}

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let status = match &self.state.status_message {
            Some(msg) => Span::styled(format!("  {msg}  "), theme.status_info),
            None if self.state.results.pending.is_empty() => {
                Span::styled("  READY  ", theme.status_info)
            }
            None => Span::styled("  WORKING  ", theme.status_warn),
        };

        let mut used = status.width() + 1;
        let budget = usize::from(area.width.saturating_sub(2));
        let mut spans = vec![status, Span::raw(" ")];

        for h in hints(self.state) {
            used += h.width();
            if used > budget {
                break;
            }
            let (key_style, desc_style) = if h.lit {
                (theme.header_active, theme.header_active)
            } else {
                (theme.footer_segment_key, theme.footer_segment_val)
            };
            spans.extend([
                Span::styled(format!(" {} ", h.key), key_style),
                Span::styled(format!(" {} ", h.desc), desc_style),
                Span::raw(" "),
            ]);
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{action::Action, reducer};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState<'_>, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                Footer {
                    state,
                    theme: &theme,
                }
                .render(f.area(), f.buffer_mut());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hints_follow_mode() {
        let mut state = AppState::default();
        assert!(hints(&state).iter().any(|h| h.key == "q"));

        reducer::update(&mut state, Action::OpenCommandPalette);
        let keys: Vec<_> = hints(&state).iter().map(|h| h.key).collect();
        assert_eq!(keys, vec!["↑/↓", "Enter", "Esc"]);
    }

    #[test]
    fn test_narrow_footer_drops_trailing_hints() {
        let state = AppState::default();
        let wide = render(&state, 160);
        assert!(wide.contains("READY"));
        assert!(wide.contains("quit"));

        let narrow = render(&state, 40);
        assert!(narrow.contains("commands"));
        assert!(!narrow.contains("quit"));
    }
}
