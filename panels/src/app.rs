//! Panel shell: key routing and frame layout

use std::ops::ControlFlow;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use slice_dispatch::{Component, EventKind};

use crate::action::{show_modal, PanelAction};
use crate::components::{Menu, ModalHost, Sidebar, SIDEBAR_WIDTH};
use crate::containers::Containers;
use crate::state::{ActiveModal, ModalKind};
use crate::store::PanelStore;

const HELP_TEXT: &str = " s: sidebar  m: menu  ?: help  q: quit";

/// Which part of the UI receives keys first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Shell,
    Menu,
    Modal,
}

impl Focus {
    /// An open dialog wins over an open menu
    pub fn of(containers: &Containers) -> Self {
        if containers.has_modal() {
            Focus::Modal
        } else if Menu::is_visible(containers.is_menu_shown()) {
            Focus::Menu
        } else {
            Focus::Shell
        }
    }
}

#[derive(Default)]
pub struct PanelUi {
    sidebar: Sidebar,
    menu: Menu,
    modal: ModalHost,
}

impl PanelUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an event to the focused component, then to the shell keymap
    pub fn handle_event(&mut self, event: &EventKind, containers: &Containers) -> Vec<PanelAction> {
        if event.is_interrupt() {
            return vec![PanelAction::Quit];
        }

        match Focus::of(containers) {
            Focus::Modal => {
                return self
                    .modal
                    .handle_event(event, containers.modal_props())
                    .into_iter()
                    .collect();
            }
            Focus::Menu => {
                let actions: Vec<_> = self
                    .menu
                    .handle_event(event, containers.menu_props(true))
                    .into_iter()
                    .collect();
                if !actions.is_empty() || is_menu_navigation(event) {
                    return actions;
                }
            }
            Focus::Shell => {}
        }

        let Some(key) = event.as_key() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Char('s') => self
                .sidebar
                .handle_event(event, containers.sidebar_props())
                .into_iter()
                .collect(),
            KeyCode::Char('m') => self
                .menu
                .handle_event(event, containers.menu_props(false))
                .into_iter()
                .collect(),
            KeyCode::Char('?') => vec![show_modal(ActiveModal::new(ModalKind::Help))],
            KeyCode::Char('q') | KeyCode::Esc => {
                vec![show_modal(ActiveModal::new(ModalKind::ConfirmQuit))]
            }
            _ => Vec::new(),
        }
    }

    /// Handle one event to completion
    ///
    /// Every resulting action is dispatched before this returns, so the next
    /// event is routed against props that already reflect this one. Breaks
    /// on [`PanelAction::Quit`] without dispatching it.
    pub fn process(
        &mut self,
        event: &EventKind,
        containers: &Containers,
        store: &mut PanelStore,
    ) -> ControlFlow<()> {
        for action in self.handle_event(event, containers) {
            if action == PanelAction::Quit {
                return ControlFlow::Break(());
            }
            store.dispatch(action);
        }
        ControlFlow::Continue(())
    }

    pub fn render(&mut self, frame: &mut Frame, containers: &Containers) {
        let area = frame.area();
        let [bar, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let content = if Sidebar::is_visible(containers.is_sidebar_shown()) {
            let [side, content] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .areas(body);
            self.sidebar.render(frame, side, containers.sidebar_props());
            content
        } else {
            body
        };
        render_summary(frame, content, containers);

        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            help,
        );

        // Dropdown may overlap the body but not the help line
        let menu_area = Rect::new(bar.x, bar.y, bar.width, bar.height + body.height);
        let is_focused = Focus::of(containers) == Focus::Menu;
        self.menu
            .render(frame, menu_area, containers.menu_props(is_focused));

        self.modal.render(frame, area, containers.modal_props());
    }
}

fn is_menu_navigation(event: &EventKind) -> bool {
    event.as_key().is_some_and(|key| {
        matches!(
            key.code,
            KeyCode::Char('j') | KeyCode::Char('k') | KeyCode::Up | KeyCode::Down
        )
    })
}

fn describe(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "shown",
        Some(false) => "hidden",
        None => "unset",
    }
}

fn render_summary(frame: &mut Frame, area: Rect, containers: &Containers) {
    let modal = containers
        .active_modal()
        .map_or("none", |active| active.component.title());
    let lines = vec![
        Line::from(format!(" sidebar: {}", describe(containers.is_sidebar_shown()))),
        Line::from(format!(" menu:    {}", describe(containers.is_menu_shown()))),
        Line::from(format!(" modal:   {}", modal)),
    ];
    let block = Block::default()
        .title(" Panels ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
