use crate::app::state::{AppMode, AppState, Panel};
use crate::components::error_banner::ErrorBanner;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ModalManager;
use crate::components::results_view::ResultsView;
use crate::components::transcript_view::TranscriptView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub results: Rect,
    pub banner: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, show_results: bool, has_error: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                        // Header
            Constraint::Min(0),                           // Body
            Constraint::Length(u16::from(has_error)),     // Error banner
            Constraint::Length(1),                        // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if show_results {
            [Constraint::Percentage(55), Constraint::Percentage(45)]
        } else {
            [Constraint::Percentage(100), Constraint::Percentage(0)]
        })
        .split(main[1]);

    AppLayout {
        header: main[0],
        transcript: body[0],
        results: body[1],
        banner: main[2],
        footer: main[3],
    }
}

fn panel_block<'a>(title: &'a str, focused: bool, app_state: &AppState) -> Block<'a> {
    let theme = &app_state.theme;
    let (border, title_style) = if focused && app_state.mode == AppMode::Normal {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(
        f.area(),
        app_state.show_results,
        app_state.last_error.is_some(),
    );

    f.render_widget(
        Header {
            state: app_state,
            theme: &app_state.theme,
        },
        layout.header,
    );

    // Left: Transcript
    let transcript_block = panel_block(
        "TRANSCRIPT",
        app_state.focused_panel == Panel::Transcript,
        app_state,
    )
    .title_bottom(Line::from(vec![
        Span::raw(" "),
        Span::styled("↑/↓", app_state.theme.footer_segment_key),
        Span::raw(": select "),
        Span::styled("Enter", app_state.theme.footer_segment_key),
        Span::raw(": open button "),
    ]));
    let transcript_inner = transcript_block.inner(layout.transcript);
    f.render_widget(transcript_block, layout.transcript);
    if transcript_inner.width > 0 && transcript_inner.height > 0 {
        f.render_stateful_widget(
            TranscriptView {
                entries: &app_state.transcript.entries,
                button: app_state.transcript.button,
                theme: &app_state.theme,
            },
            transcript_inner,
            &mut app_state.transcript.list_state,
        );
    }

    // Right: Results
    if app_state.show_results && layout.results.width > 0 {
        let results = &app_state.results;
        let mut title = String::from("RESULTS");
        if let Some((k, n)) = results.position().filter(|(_, n)| *n > 1) {
            title.push_str(&format!(" {k}/{n}"));
        }
        if !results.pending.is_empty() {
            title.push_str(&format!(" ({} running)", results.pending.len()));
        }
        let results_block = panel_block(&title, app_state.focused_panel == Panel::Results, app_state);
        let results_inner = results_block.inner(layout.results);
        f.render_widget(results_block, layout.results);
        f.render_widget(
            ResultsView {
                results: &app_state.results,
                theme: &app_state.theme,
            },
            results_inner,
        );
    }

    if let Some(err) = &app_state.last_error {
        f.render_widget(
            ErrorBanner {
                error: err,
                theme: &app_state.theme,
            },
            layout.banner,
        );
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme: &app_state.theme,
        },
        layout.footer,
    );

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &app_state.theme,
            app_state,
        },
        f.area(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{action::Action, reducer};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_reserves_banner_only_on_error() {
        let area = Rect::new(0, 0, 80, 24);
        let calm = get_layout(area, true, false);
        assert_eq!(calm.banner.height, 0);
        assert_eq!(calm.footer.y, 23);

        let loud = get_layout(area, true, true);
        assert_eq!(loud.banner.height, 1);
        assert_eq!(loud.banner.y, 22);

        let narrow = get_layout(area, false, false);
        assert_eq!(narrow.results.width, 0);
        assert_eq!(narrow.transcript.width, 80);
    }

    #[test]
    fn test_draws_cleaned_reply_and_palette() {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::IngestReply("Booking link below. [SKILL:BOOK_MEETING:intro]".to_string()),
        );

        let text = screen(&mut state);
        assert!(text.contains("Booking link below."));
        assert!(!text.contains("[SKILL:"));
        assert!(text.contains("Book a meeting"));

        reducer::update(&mut state, Action::OpenCommandPalette);
        let text = screen(&mut state);
        assert!(text.contains("COMMAND PALETTE"));
        assert!(text.contains("Search Projects"));
    }

    #[test]
    fn test_both_searches_of_one_reply_can_be_shown() {
        use crate::domain::models::SkillOutput;
        use crate::domain::skill::SkillName;

        let table = |title: &str, row: &str| SkillOutput::Table {
            title: title.to_string(),
            columns: vec!["Name".to_string()],
            rows: vec![vec![row.to_string()]],
        };

        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::IngestReply(
                "[SKILL:SEARCH_PROJECTS:deck] and [SKILL:SEARCH_CUSTOMERS:ada]".to_string(),
            ),
        );
        // Second search finishes first
        reducer::update(
            &mut state,
            Action::SkillCompleted {
                ticket: 2,
                skill: SkillName::SearchCustomers,
                param: "ada".to_string(),
                result: Ok(table("customers", "Ada Nguyen")),
            },
        );
        reducer::update(
            &mut state,
            Action::SkillCompleted {
                ticket: 1,
                skill: SkillName::SearchProjects,
                param: "deck".to_string(),
                result: Ok(table("projects", "Deck rebuild")),
            },
        );

        let text = screen(&mut state);
        assert!(text.contains("Ada Nguyen"));
        assert!(text.contains("RESULTS 2/2"));

        reducer::update(&mut state, Action::ShowOlderResult);
        let text = screen(&mut state);
        assert!(text.contains("Deck rebuild"));
        assert!(!text.contains("Ada Nguyen"));
        assert!(text.contains("RESULTS 1/2"));

        reducer::update(&mut state, Action::ShowNewerResult);
        assert!(screen(&mut state).contains("Ada Nguyen"));
    }

    #[test]
    fn test_draws_error_banner() {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::ErrorOccurred("Failed to read catalog".to_string()),
        );
        let text = screen(&mut state);
        assert!(text.contains("Failed to read catalog"));
    }
}
