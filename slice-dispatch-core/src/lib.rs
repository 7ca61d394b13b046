//! Core traits and types for slice-dispatch
//!
//! This crate provides the foundational abstractions for building TUI
//! applications on a unidirectional data flow, following a Redux/Elm-inspired
//! architecture: dispatch an action, reducers compute the next state, the
//! store swaps it in and notifies listeners, connected components re-render.
//!
//! # Core Concepts
//!
//! - **Action**: A closed enum of events describing state changes
//! - **Reducer**: `fn(&S, &A) -> Option<S>`, pure, `None` when nothing changed
//! - **Combined state**: Independent slices composed by [`combine_reducers!`]
//! - **Store**: Owner of the current state, with `dispatch`/`state`/`subscribe`
//! - **Connector**: Selector-derived props refreshed after each dispatch
//! - **Component**: Presentation unit rendering props and emitting actions
//!
//! # Basic Example
//!
//! ```ignore
//! use slice_dispatch_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(infer_categories)]
//! enum PanelAction {
//!     SidebarShow(Option<bool>),
//!     SidebarHide,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct SidebarState {
//!     is_sidebar_shown: Option<bool>,
//! }
//!
//! fn sidebar(state: &SidebarState, action: &PanelAction) -> Option<SidebarState> {
//!     let next = match action {
//!         PanelAction::SidebarShow(shown) => *shown,
//!         PanelAction::SidebarHide => None,
//!     };
//!     (next != state.is_sidebar_shown).then_some(SidebarState { is_sidebar_shown: next })
//! }
//!
//! combine_reducers! {
//!     struct AppState / AppStateBuilder, action = PanelAction {
//!         sidebar: SidebarState => sidebar,
//!     }
//! }
//!
//! let state = AppState::builder().sidebar(SidebarState::default()).build()?;
//! let mut store = Store::new(state, AppState::reduce);
//! let redraw = store.subscribe(|state: &AppState| tracing::debug!(?state));
//! store.dispatch(PanelAction::SidebarShow(Some(true)));
//! ```

pub mod action;
pub mod combine;
pub mod component;
pub mod connect;
pub mod error;
pub mod event;
pub mod poller;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory};
pub use component::Component;
pub use error::StoreError;

// Composition exports
pub use combine::{reduce_slice, CombinedState};
pub use connect::{connect, Connected, Selector};

// Event exports
pub use event::{EventKind, EventType};
pub use poller::{translate, EventPoller};

// Store exports
pub use store::{
    ComposedMiddleware, Listener, LoggingMiddleware, Middleware, Observable, Reducer, Store,
    StoreWithMiddleware, Subscription,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, ctrl_key, into_event,
    key_code, ListenerProbe, RenderHarness, TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory};
    pub use crate::combine::CombinedState;
    pub use crate::combine_reducers;
    pub use crate::component::Component;
    pub use crate::connect::{connect, Connected};
    pub use crate::error::StoreError;
    pub use crate::event::{EventKind, EventType};
    pub use crate::poller::EventPoller;
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, Observable, Reducer, Store,
        StoreWithMiddleware, Subscription,
    };

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
