//! Containers - connected props plus the callbacks bound to them
//!
//! Each container follows one slice through a selector and hands the
//! presentation components plain values and `fn` pointers producing
//! actions. Components never see the store.

use slice_dispatch::{connect, Connected, Observable};

use crate::action::{
    confirm_modal, hide_menu, hide_modal, hide_sidebar, show_menu, show_modal, show_sidebar,
    PanelAction,
};
use crate::components::{MenuProps, ModalHostProps, SidebarProps};
use crate::state::{ActiveModal, PanelState};

pub fn select_sidebar(state: &PanelState) -> Option<bool> {
    state.is_sidebar_shown()
}

pub fn select_menu(state: &PanelState) -> Option<bool> {
    state.is_menu_shown()
}

pub fn select_modal(state: &PanelState) -> Option<ActiveModal> {
    state.active_modal().cloned()
}

/// The three connected containers of the panel shell
#[derive(Debug)]
pub struct Containers {
    sidebar: Connected<Option<bool>>,
    menu: Connected<Option<bool>>,
    modal: Connected<Option<ActiveModal>>,
}

impl Containers {
    pub fn connect<O>(store: &mut O) -> Self
    where
        O: Observable<PanelState> + ?Sized,
    {
        Self {
            sidebar: connect(store, select_sidebar),
            menu: connect(store, select_menu),
            modal: connect(store, select_modal),
        }
    }

    /// Whether any container's props changed, clearing every flag
    pub fn take_changed(&self) -> bool {
        // `|` so that every flag is cleared
        self.sidebar.take_changed() | self.menu.take_changed() | self.modal.take_changed()
    }

    pub fn is_sidebar_shown(&self) -> Option<bool> {
        *self.sidebar.props()
    }

    pub fn is_menu_shown(&self) -> Option<bool> {
        *self.menu.props()
    }

    pub fn active_modal(&self) -> Option<ActiveModal> {
        self.modal.get()
    }

    pub fn has_modal(&self) -> bool {
        self.modal.props().is_some()
    }

    pub fn sidebar_props(&self) -> SidebarProps<PanelAction> {
        SidebarProps {
            is_shown: self.is_sidebar_shown(),
            on_show: |shown| show_sidebar(shown),
            on_hide: hide_sidebar,
        }
    }

    pub fn menu_props(&self, is_focused: bool) -> MenuProps<PanelAction> {
        MenuProps {
            is_shown: self.is_menu_shown(),
            is_focused,
            on_show: |shown| show_menu(shown),
            on_hide: hide_menu,
            on_open: |kind| show_modal(ActiveModal::new(kind)),
        }
    }

    pub fn modal_props(&self) -> ModalHostProps<PanelAction> {
        ModalHostProps {
            active: self.active_modal(),
            on_close: hide_modal,
            on_confirm: confirm_modal,
        }
    }

    /// Unsubscribe every container from `store`
    pub fn disconnect<O>(self, store: &mut O)
    where
        O: Observable<PanelState> + ?Sized,
    {
        self.sidebar.disconnect(store);
        self.menu.disconnect(store);
        self.modal.disconnect(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalKind;
    use crate::store::{configure_store, PanelConfig};

    #[test]
    fn test_initial_props_are_flagged() {
        let mut store = configure_store(&PanelConfig::default()).unwrap();
        let containers = Containers::connect(&mut store);

        assert!(containers.take_changed());
        assert!(!containers.take_changed());
        assert_eq!(containers.is_sidebar_shown(), None);
        assert_eq!(containers.is_menu_shown(), None);
        assert!(!containers.has_modal());
    }

    #[test]
    fn test_only_affected_container_changes() {
        let mut store = configure_store(&PanelConfig::default()).unwrap();
        let containers = Containers::connect(&mut store);
        containers.take_changed();

        store.dispatch(show_menu(true));

        assert!(!containers.sidebar.is_changed());
        assert!(containers.menu.is_changed());
        assert!(!containers.modal.is_changed());
        assert_eq!(containers.is_menu_shown(), Some(true));
    }

    #[test]
    fn test_take_changed_clears_all_flags() {
        let mut store = configure_store(&PanelConfig::default()).unwrap();
        let containers = Containers::connect(&mut store);

        store.dispatch(show_sidebar(true));
        store.dispatch(show_modal(ActiveModal::new(ModalKind::Help)));

        assert!(containers.take_changed());
        assert!(!containers.sidebar.is_changed());
        assert!(!containers.menu.is_changed());
        assert!(!containers.modal.is_changed());
    }

    #[test]
    fn test_bound_callbacks_produce_actions() {
        let mut store = configure_store(&PanelConfig::default()).unwrap();
        let containers = Containers::connect(&mut store);

        let sidebar = containers.sidebar_props();
        assert_eq!((sidebar.on_show)(true), PanelAction::SidebarShow(Some(true)));
        assert_eq!((sidebar.on_hide)(), PanelAction::SidebarHide);

        let menu = containers.menu_props(false);
        assert_eq!(
            (menu.on_open)(ModalKind::About),
            PanelAction::ModalShow(Some(ActiveModal::new(ModalKind::About)))
        );

        let modal = containers.modal_props();
        assert_eq!((modal.on_confirm)(ModalKind::ConfirmQuit), PanelAction::Quit);
        assert_eq!((modal.on_close)(), PanelAction::ModalHide);
    }

    #[test]
    fn test_disconnect_stops_updates() {
        let mut store = configure_store(&PanelConfig::default()).unwrap();
        let before = store.listener_count();
        let containers = Containers::connect(&mut store);
        assert_eq!(store.listener_count(), before + 3);

        containers.disconnect(&mut store);
        assert_eq!(store.listener_count(), before);
    }
}
