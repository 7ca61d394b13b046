//! Modal overlay: dimmed backdrop plus a centered dialog

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use slice_dispatch::{Component, EventKind};

use crate::state::{ActiveModal, ModalKind};

const DIALOG_WIDTH: u16 = 48;

pub struct ModalHostProps<A> {
    pub active: Option<ActiveModal>,
    pub on_close: fn() -> A,
    /// Invoked when the dialog is accepted
    pub on_confirm: fn(ModalKind) -> A,
}

/// Renders whichever dialog is active; `enter`/`y` accept, `esc`/`n` close
#[derive(Default)]
pub struct ModalHost;

impl<A> Component<A> for ModalHost {
    type Props<'a> = ModalHostProps<A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let (Some(active), Some(key)) = (props.active.as_ref(), event.as_key()) else {
            return None;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some((props.on_confirm)(active.component)),
            KeyCode::Esc | KeyCode::Char('n') => Some((props.on_close)()),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(active) = props.active else {
            return;
        };

        dim_buffer(frame.buffer_mut());

        let lines = dialog_lines(&active);
        let height = lines.len() as u16 + 2;
        let dialog = centered_rect(DIALOG_WIDTH, height, area);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", active.component.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Rgb(30, 30, 40)));

        frame.render_widget(Clear, dialog);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            dialog,
        );
    }
}

fn dialog_lines(active: &ActiveModal) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = match active.component {
        ModalKind::Help => vec![
            Line::from(" s  toggle sidebar"),
            Line::from(" m  toggle menu"),
            Line::from(" ?  this help"),
            Line::from(" q  quit"),
        ],
        ModalKind::About => vec![Line::from(" Sidebar, menu and modal slices")],
        ModalKind::ConfirmQuit => vec![Line::from(" Quit the application?")],
    };

    if !active.props.is_empty() {
        lines.push(Line::default());
        for (key, value) in &active.props {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}: ", key), Style::default().fg(Color::DarkGray)),
                Span::raw(value.clone()),
            ]));
        }
    }

    lines.push(Line::default());
    let hint = match active.component {
        ModalKind::ConfirmQuit => " y: quit   n/esc: cancel",
        ModalKind::Help | ModalKind::About => " enter/esc: close",
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Fade everything rendered so far so the dialog stands out
pub fn dim_buffer(buffer: &mut Buffer) {
    for cell in buffer.content.iter_mut() {
        cell.set_fg(Color::DarkGray);
        cell.modifier.insert(Modifier::DIM);
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
