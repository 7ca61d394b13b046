//! Actions - what can happen to the panels
//!
//! Every show/hide intent is a variant of one closed enum. Each slice
//! reducer matches the whole enum exhaustively and ignores the variants
//! that belong to other slices.

use slice_dispatch::Action;

use crate::state::{ActiveModal, ModalKind};

#[derive(Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum PanelAction {
    /// Set sidebar visibility to the payload; `None` clears it
    SidebarShow(Option<bool>),
    SidebarHide,

    /// Set menu visibility to the payload; `None` clears it
    MenuShow(Option<bool>),
    MenuHide,

    /// Make the payload the active dialog; `None` clears it
    ModalShow(Option<ActiveModal>),
    ModalHide,

    /// No-op event run once when the store is built
    #[action(category = "lifecycle")]
    Init,

    /// Handled by the main loop, ignored by every slice
    Quit,
}

pub fn show_sidebar(payload: impl Into<Option<bool>>) -> PanelAction {
    PanelAction::SidebarShow(payload.into())
}

pub fn hide_sidebar() -> PanelAction {
    PanelAction::SidebarHide
}

pub fn show_menu(payload: impl Into<Option<bool>>) -> PanelAction {
    PanelAction::MenuShow(payload.into())
}

pub fn hide_menu() -> PanelAction {
    PanelAction::MenuHide
}

pub fn show_modal(payload: impl Into<Option<ActiveModal>>) -> PanelAction {
    PanelAction::ModalShow(payload.into())
}

pub fn hide_modal() -> PanelAction {
    PanelAction::ModalHide
}

/// Action for accepting a dialog: quitting for the quit prompt, closing otherwise
pub fn confirm_modal(kind: ModalKind) -> PanelAction {
    match kind {
        ModalKind::ConfirmQuit => PanelAction::Quit,
        ModalKind::Help | ModalKind::About => hide_modal(),
    }
}
