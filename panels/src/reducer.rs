//! Slice reducers - pure functions: (slice, action) -> Option<slice>
//!
//! FRAMEWORK PATTERN: Reducer
//! - fn(state: &S, action: &A) -> Option<S>
//! - `None` keeps the current value (nothing to re-render)
//! - "show" sets the field to the payload, "hide" clears it
//! - Every match is exhaustive; other slices' variants are listed explicitly

use crate::action::PanelAction;
use crate::state::{MenuState, ModalState, SidebarState};

pub fn sidebar(state: &SidebarState, action: &PanelAction) -> Option<SidebarState> {
    let next = match action {
        PanelAction::SidebarShow(shown) => *shown,
        PanelAction::SidebarHide => None,
        PanelAction::MenuShow(_)
        | PanelAction::MenuHide
        | PanelAction::ModalShow(_)
        | PanelAction::ModalHide
        | PanelAction::Init
        | PanelAction::Quit => return None,
    };

    (next != state.is_sidebar_shown).then_some(SidebarState {
        is_sidebar_shown: next,
    })
}

pub fn menu(state: &MenuState, action: &PanelAction) -> Option<MenuState> {
    let next = match action {
        PanelAction::MenuShow(shown) => *shown,
        PanelAction::MenuHide => None,
        PanelAction::SidebarShow(_)
        | PanelAction::SidebarHide
        | PanelAction::ModalShow(_)
        | PanelAction::ModalHide
        | PanelAction::Init
        | PanelAction::Quit => return None,
    };

    (next != state.is_menu_shown).then_some(MenuState {
        is_menu_shown: next,
    })
}

pub fn modal(state: &ModalState, action: &PanelAction) -> Option<ModalState> {
    let next = match action {
        PanelAction::ModalShow(active) => active.as_ref(),
        PanelAction::ModalHide => None,
        PanelAction::SidebarShow(_)
        | PanelAction::SidebarHide
        | PanelAction::MenuShow(_)
        | PanelAction::MenuHide
        | PanelAction::Init
        | PanelAction::Quit => return None,
    };

    if next == state.active_modal.as_ref() {
        return None;
    }
    Some(ModalState {
        active_modal: next.cloned(),
    })
}
