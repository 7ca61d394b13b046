use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use slice_dispatch::{Component, EventKind};

use crate::state::ModalKind;

pub struct MenuProps<A> {
    pub is_shown: Option<bool>,
    /// Whether navigation keys reach the dropdown
    pub is_focused: bool,
    pub on_show: fn(bool) -> A,
    pub on_hide: fn() -> A,
    /// Invoked with the chosen entry
    pub on_open: fn(ModalKind) -> A,
}

/// Menu button with a dropdown listing the dialogs
///
/// `m` toggles the dropdown. While it is open and focused, `j`/`k` move the
/// highlight, `enter` closes the menu and opens the highlighted dialog, and
/// `esc` closes the menu.
#[derive(Default)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> ModalKind {
        ModalKind::ALL[self.selected.min(ModalKind::ALL.len() - 1)]
    }

    pub fn is_visible(is_shown: Option<bool>) -> bool {
        is_shown == Some(true)
    }

    /// Height of the dropdown including borders
    pub fn dropdown_height() -> u16 {
        ModalKind::ALL.len() as u16 + 2
    }
}

impl<A> Component<A> for Menu {
    type Props<'a> = MenuProps<A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let Some(key) = event.as_key() else {
            return Vec::new();
        };
        let is_open = Self::is_visible(props.is_shown);

        if key.code == KeyCode::Char('m') {
            return if is_open {
                vec![(props.on_hide)()]
            } else {
                self.selected = 0;
                vec![(props.on_show)(true)]
            };
        }

        if !is_open || !props.is_focused {
            return Vec::new();
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1).min(ModalKind::ALL.len() - 1);
                Vec::new()
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Enter => vec![(props.on_hide)(), (props.on_open)(self.selected())],
            KeyCode::Esc => vec![(props.on_hide)()],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }
        let is_open = Self::is_visible(props.is_shown);

        let button_style = if is_open {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let marker = if is_open { "▴" } else { "▾" };
        let button = Line::from(vec![
            Span::styled(format!(" Menu {} ", marker), button_style),
            Span::styled(
                if is_open { " shown" } else { " hidden" },
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let bar = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(Paragraph::new(button), bar);

        if !is_open {
            return;
        }

        let height = Self::dropdown_height().min(area.height.saturating_sub(1));
        let dropdown = Rect::new(area.x, area.y + 1, 20.min(area.width), height);

        let items: Vec<ListItem> = ModalKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::raw(kind.title())).style(style)
            })
            .collect();

        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(Clear, dropdown);
        frame.render_widget(list, dropdown);
    }
}
