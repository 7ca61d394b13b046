//! Store assembly - the single owner of panel state
//!
//! Built once by the application's top-level composition point and passed
//! down by reference; there is no global store.

use std::collections::BTreeMap;

use slice_dispatch::{
    CombinedState, ComposedMiddleware, LoggingMiddleware, Middleware, Store, StoreError,
    StoreWithMiddleware,
};
use tracing::{trace, warn};

use crate::action::PanelAction;
use crate::state::{MenuState, ModalState, PanelState, SidebarState};

pub type PanelMiddleware = ComposedMiddleware<LoggingMiddleware, DispatchStats>;

pub type PanelStore = StoreWithMiddleware<PanelState, PanelAction, PanelMiddleware>;

/// Initial visibility and logging options
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    /// Initial sidebar visibility
    pub sidebar: Option<bool>,
    /// Initial menu visibility
    pub menu: Option<bool>,
    /// Log actions before as well as after dispatch
    pub verbose_log: bool,
}

/// Running counts of what went through the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchStats {
    dispatched: usize,
    changed: usize,
    by_category: BTreeMap<&'static str, usize>,
}

impl DispatchStats {
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Dispatches that replaced the state
    pub fn changed(&self) -> usize {
        self.changed
    }

    /// Completed dispatches per action category
    pub fn by_category(&self) -> &BTreeMap<&'static str, usize> {
        &self.by_category
    }
}

impl Middleware<PanelAction> for DispatchStats {
    fn before(&mut self, _action: &PanelAction) {}

    fn after(&mut self, action: &PanelAction, state_changed: bool) {
        self.dispatched += 1;
        if state_changed {
            self.changed += 1;
        }
        let category = action.category().unwrap_or("uncategorized");
        *self.by_category.entry(category).or_default() += 1;
    }
}

pub fn initial_state(config: &PanelConfig) -> Result<PanelState, StoreError> {
    PanelState::builder()
        .sidebar(SidebarState {
            is_sidebar_shown: config.sidebar,
        })
        .menu(MenuState {
            is_menu_shown: config.menu,
        })
        .modal(ModalState::default())
        .build()
}

/// Build the store: initial slices, the init event, middleware and state tracing
pub fn configure_store(config: &PanelConfig) -> Result<PanelStore, StoreError> {
    let state = initial_state(config)?;
    let store = Store::with_init(state, PanelState::reduce, PanelAction::Init);

    let logging = if config.verbose_log {
        LoggingMiddleware::verbose()
    } else {
        LoggingMiddleware::new()
    };
    let middleware = ComposedMiddleware::new(logging, DispatchStats::default());
    let mut store = StoreWithMiddleware::from_store(store, middleware);

    let mut tracer = StateTracer::new(store.state().clone());
    store.subscribe(move |state: &PanelState| {
        tracer.observe(state);
    });
    Ok(store)
}

/// Logs which slices a dispatch replaced, with a JSON snapshot
#[derive(Debug)]
pub struct StateTracer {
    previous: PanelState,
}

impl StateTracer {
    pub fn new(initial: PanelState) -> Self {
        Self { previous: initial }
    }

    /// Slices replaced since the last observed state
    pub fn observe(&mut self, state: &PanelState) -> Vec<&'static str> {
        let changed = state.changed_slices(&self.previous);
        if changed.is_empty() {
            return changed;
        }
        match serde_json::to_string(state) {
            Ok(snapshot) => trace!(?changed, %snapshot, "State replaced"),
            Err(e) => warn!(?changed, error = %e, "Could not serialize state snapshot"),
        }
        self.previous = state.clone();
        changed
    }
}
