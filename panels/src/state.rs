//! Application state - one slice per independent concern
//!
//! FRAMEWORK PATTERN: Combined state
//! - Each slice is a plain value owned by the composite through an `Arc`
//! - Only the slice's reducer produces new values for it
//! - A dispatch that leaves a slice alone keeps the very same `Arc`

use std::collections::BTreeMap;

use serde::Serialize;
use slice_dispatch::combine_reducers;

use crate::action::PanelAction;
use crate::reducer;

/// Sidebar visibility; `None` means never set or cleared
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SidebarState {
    pub is_sidebar_shown: Option<bool>,
}

/// Menu visibility; `None` means never set or cleared
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MenuState {
    pub is_menu_shown: Option<bool>,
}

/// The dialog currently on screen, if any
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModalState {
    pub active_modal: Option<ActiveModal>,
}

/// Which dialog content to render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ModalKind {
    Help,
    About,
    ConfirmQuit,
}

impl ModalKind {
    /// Every dialog, in menu order
    pub const ALL: [ModalKind; 3] = [ModalKind::Help, ModalKind::About, ModalKind::ConfirmQuit];

    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Help => "Help",
            ModalKind::About => "About",
            ModalKind::ConfirmQuit => "Quit",
        }
    }
}

/// A dialog plus the properties it is rendered with
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActiveModal {
    pub component: ModalKind,
    pub props: BTreeMap<String, String>,
}

impl ActiveModal {
    pub fn new(component: ModalKind) -> Self {
        Self {
            component,
            props: BTreeMap::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }
}

impl From<ModalKind> for ActiveModal {
    fn from(kind: ModalKind) -> Self {
        Self::new(kind)
    }
}

combine_reducers! {
    /// Composite state, keyed by slice name
    #[derive(Serialize)]
    pub struct PanelState / PanelStateBuilder, action = PanelAction {
        /// Sidebar slice
        sidebar: SidebarState => reducer::sidebar,
        /// Menu slice
        menu: MenuState => reducer::menu,
        /// Modal slice
        modal: ModalState => reducer::modal,
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            sidebar: Default::default(),
            menu: Default::default(),
            modal: Default::default(),
        }
    }
}

impl PanelState {
    pub fn is_sidebar_shown(&self) -> Option<bool> {
        self.sidebar.is_sidebar_shown
    }

    pub fn is_menu_shown(&self) -> Option<bool> {
        self.menu.is_menu_shown
    }

    pub fn active_modal(&self) -> Option<&ActiveModal> {
        self.modal.active_modal.as_ref()
    }
}
