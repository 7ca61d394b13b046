//! Render tests for the panel shell using RenderHarness

use panels::action::{show_menu, show_modal, show_sidebar};
use panels::app::PanelUi;
use panels::components::{Sidebar, SidebarProps};
use panels::containers::Containers;
use panels::state::{ActiveModal, ModalKind};
use panels::store::{configure_store, PanelConfig};
use slice_dispatch::testing::*;
use slice_dispatch::Component;

#[test]
fn test_render_initial_shell() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    let containers = Containers::connect(&mut store);
    let mut ui = PanelUi::new();
    let mut render = RenderHarness::new(70, 16);

    let output = render.render_to_string_plain(|frame| ui.render(frame, &containers));

    assert!(output.contains("Menu"), "menu button is always drawn");
    assert!(!output.contains("Overview"), "sidebar starts hidden");
    assert!(output.contains("sidebar: unset"));
    assert!(output.contains("modal:   none"));
}

#[test]
fn test_render_follows_dispatches() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    let containers = Containers::connect(&mut store);
    let mut ui = PanelUi::new();
    let mut render = RenderHarness::new(70, 16);
    containers.take_changed();

    store.dispatch(show_sidebar(true));
    store.dispatch(show_menu(true));
    assert!(containers.take_changed());

    let output = render.render_to_string_plain(|frame| ui.render(frame, &containers));

    assert!(output.contains("sidebar: shown"), "summary sits beside the sidebar");
    assert!(output.contains("Help"), "dropdown lists the dialogs");
    assert!(output.contains("About"));
}

#[test]
fn test_render_help_dialog_with_props() {
    let mut store = configure_store(&PanelConfig::default()).unwrap();
    let containers = Containers::connect(&mut store);
    let mut ui = PanelUi::new();
    let mut render = RenderHarness::new(70, 20);

    store.dispatch(show_modal(
        ActiveModal::new(ModalKind::Help).with_prop("source", "menu"),
    ));

    let output = render.render_to_string_plain(|frame| ui.render(frame, &containers));

    assert!(output.contains("toggle sidebar"));
    assert!(output.contains("source: menu"));
}

#[test]
fn test_render_sidebar_component_alone() {
    let mut render = RenderHarness::new(30, 8);
    let mut sidebar = Sidebar;

    let output = render.render_to_string_plain(|frame| {
        let props = SidebarProps {
            is_shown: Some(true),
            on_show: |_| (),
            on_hide: || (),
        };
        let area = frame.area();
        Component::<()>::render(&mut sidebar, frame, area, props);
    });

    assert!(output.contains("Sidebar"));
    assert!(output.contains("Settings"));
}
