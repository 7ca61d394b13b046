//! End-to-end store behaviour through the public panels API

use std::sync::Arc;

use panels::action::{
    hide_menu, hide_modal, hide_sidebar, show_menu, show_modal, show_sidebar, PanelAction,
};
use panels::state::{ActiveModal, MenuState, ModalKind, PanelState, SidebarState};
use panels::store::{configure_store, initial_state, PanelConfig};
use slice_dispatch::testing::ListenerProbe;
use slice_dispatch::{CombinedState, Store, StoreError};

fn snapshot(state: &PanelState) -> (Option<bool>, Option<bool>, Option<ActiveModal>) {
    (
        state.is_sidebar_shown(),
        state.is_menu_shown(),
        state.active_modal().cloned(),
    )
}

#[test]
fn test_sidebar_show_then_hide() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    assert_eq!(snapshot(store.state()), (None, None, None));

    store.dispatch(show_sidebar(true));
    assert_eq!(snapshot(store.state()), (Some(true), None, None));

    store.dispatch(hide_sidebar());
    assert_eq!(snapshot(store.state()), (None, None, None));
}

#[test]
fn test_modal_show_then_hide() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();

    store.dispatch(show_modal(ActiveModal::new(ModalKind::About)));
    let active = store.state().active_modal().cloned();
    assert_eq!(active.map(|m| m.component), Some(ModalKind::About));
    assert!(store.state().active_modal().unwrap().props.is_empty());

    store.dispatch(hide_modal());
    assert!(store.state().active_modal().is_none());
}

#[test]
fn test_show_menu_notifies_every_listener_once() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    let first = ListenerProbe::attach(&mut store, |s: &PanelState| s.is_menu_shown());
    let second = ListenerProbe::attach(&mut store, |s: &PanelState| s.is_sidebar_shown());

    store.dispatch(show_menu(true));

    assert_eq!(store.state().is_menu_shown(), Some(true));
    assert_eq!(first.observed(), vec![Some(true)]);
    assert_eq!(second.observed(), vec![None]);
}

#[test]
fn test_listeners_notified_even_when_nothing_changed() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    let probe = ListenerProbe::attach(&mut store, |s: &PanelState| s.is_menu_shown());

    assert!(!store.dispatch(hide_menu()));
    assert!(!store.dispatch(PanelAction::Quit));

    assert_eq!(probe.calls(), 2);
}

#[test]
fn test_sidebar_and_menu_are_isolated() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    store.dispatch(show_menu(true));
    let menu = Arc::clone(&store.state().menu);
    let modal = Arc::clone(&store.state().modal);

    store.dispatch(show_sidebar(false));
    store.dispatch(hide_sidebar());

    assert!(Arc::ptr_eq(&menu, &store.state().menu));
    assert!(Arc::ptr_eq(&modal, &store.state().modal));

    let sidebar = Arc::clone(&store.state().sidebar);
    store.dispatch(hide_menu());
    assert!(Arc::ptr_eq(&sidebar, &store.state().sidebar));
}

#[test]
fn test_changed_slices_reports_only_touched_slice() {
    let state = initial_state(&PanelConfig::default()).unwrap();
    let next = state.reduce(&show_menu(true)).unwrap();

    assert_eq!(next.changed_slices(&state), vec!["menu"]);
    assert!(state.reduce(&hide_sidebar()).is_none());
}

#[test]
fn test_unsubscribed_listener_is_not_called() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    let probe = ListenerProbe::attach(&mut store, |s: &PanelState| s.is_sidebar_shown());

    store.dispatch(show_sidebar(true));
    assert!(store.unsubscribe(probe.subscription()));
    store.dispatch(hide_sidebar());

    assert_eq!(probe.observed(), vec![Some(true)]);
}

#[test]
fn test_missing_slice_fails_at_construction() {
    let err = PanelState::builder()
        .sidebar(SidebarState::default())
        .menu(MenuState::default())
        .build()
        .unwrap_err();

    assert_eq!(err, StoreError::MissingInitialState { slice: "modal" });
    assert_eq!(err.to_string(), "slice `modal` has no initial state");
}

#[test]
fn test_plain_store_over_panel_state() {
    let state = initial_state(&PanelConfig {
        menu: Some(false),
        ..Default::default()
    })
    .unwrap();
    let mut store = Store::new(state, PanelState::reduce);

    assert!(store.dispatch(show_menu(true)));
    assert_eq!(store.state().is_menu_shown(), Some(true));
}

#[test]
fn test_listener_panic_propagates_after_swap() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    store.subscribe(|state: &PanelState| {
        if state.is_sidebar_shown() == Some(true) {
            panic!("listener failure");
        }
    });
    let skipped = ListenerProbe::attach(&mut store, |s: &PanelState| s.is_sidebar_shown());

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        store.dispatch(show_sidebar(true));
    }));

    assert!(result.is_err());
    assert_eq!(store.state().is_sidebar_shown(), Some(true));
    assert_eq!(skipped.calls(), 0);

    store.dispatch(hide_sidebar());
    assert_eq!(skipped.observed(), vec![None]);
}
