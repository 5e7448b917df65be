use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

fn center(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [row] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    let [cell] = Layout::horizontal([horizontal]).flex(Flex::Center).areas(row);
    cell
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    center(
        r,
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Percentage(percent_y.min(100)),
    )
}

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    center(
        r,
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Length(height.min(r.height)),
    )
}

/// Clears `modal` over a drop shadow and returns its titled frame.
pub fn open_modal<'a>(
    buf: &mut Buffer,
    modal: Rect,
    screen: Rect,
    title: &'a str,
    theme: &Theme,
) -> Block<'a> {
    let shadow = Rect {
        x: modal.x.saturating_add(1),
        y: modal.y.saturating_add(1),
        ..modal
    }
    .intersection(screen);
    buf.set_style(shadow, Style::default().bg(ratatui::style::Color::Black));
    Clear.render(modal, buf);

    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, theme.header_active),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus)
}

/// First visible row of a list of `visible` rows that keeps `selected` on
/// screen.
#[must_use]
pub fn list_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    }
}

#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
