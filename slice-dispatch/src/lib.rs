//! slice-dispatch: slice reducers, a subscribable store and connectors for Rust TUI apps
//!
//! Like Redux, but typed: actions are a closed enum, each slice reducer is a
//! pure function over its own piece of state, and the root reducer is
//! assembled by [`combine_reducers!`]. Components are pure functions of
//! props; containers connect them to the store.
//!
//! # Example
//! ```ignore
//! use slice_dispatch::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(infer_categories)]
//! enum PanelAction {
//!     MenuShow(Option<bool>),
//!     MenuHide,
//! }
//!
//! let mut store = Store::new(state, PanelState::reduce);
//! let menu = connect(&mut store, |state: &PanelState| state.menu.is_menu_shown);
//! store.dispatch(PanelAction::MenuShow(Some(true)));
//! assert!(menu.take_changed());
//! ```

// Re-export everything from core
pub use slice_dispatch_core::*;

// Re-export derive macros
pub use slice_dispatch_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use slice_dispatch_core::{Action, ActionCategory, CombinedState, Component, Observable};

    // Composition and store
    pub use slice_dispatch_core::{
        combine_reducers, connect, ComposedMiddleware, Connected, LoggingMiddleware, Middleware,
        Reducer, Store, StoreError, StoreWithMiddleware, Subscription,
    };

    // Event plumbing
    pub use slice_dispatch_core::{EventKind, EventPoller};

    // Derive macros
    pub use slice_dispatch_macros::Action;

    // Ratatui re-exports
    pub use slice_dispatch_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
