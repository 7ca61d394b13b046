//! Test utilities for slice-dispatch applications
//!
//! - [`char_key`], [`key_code`], [`ctrl_key`]: build `KeyEvent`s
//! - [`RenderHarness`]: render components into an in-memory buffer
//! - [`TestHarness`]: state plus a channel capturing emitted actions
//! - [`ListenerProbe`]: record what listeners observed after each dispatch
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use slice_dispatch::testing::{char_key, into_event, TestHarness};
//!
//! let mut harness = TestHarness::<(), PanelAction>::new(());
//! for action in sidebar.handle_event(&into_event(char_key('s')), props) {
//!     harness.emit(action);
//! }
//! let emitted = harness.drain_emitted();
//! assert_emitted!(emitted, PanelAction::SidebarShow(Some(true)));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};
use tokio::sync::mpsc;

use crate::event::EventKind;
use crate::store::{Observable, Subscription};
use crate::Action;

/// Create a `KeyEvent` for a key code with no modifiers.
pub fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with no modifiers.
///
/// # Examples
///
/// ```
/// use slice_dispatch_core::testing::char_key;
/// use crossterm::event::KeyCode;
///
/// let k = char_key('x');
/// assert_eq!(k.code, KeyCode::Char('x'));
/// ```
pub fn char_key(c: char) -> KeyEvent {
    key_code(KeyCode::Char(c))
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..char_key(c)
    }
}

/// Wrap a `KeyEvent` as an [`EventKind`] for `handle_event` tests.
pub fn into_event(key_event: KeyEvent) -> EventKind {
    EventKind::Key(key_event)
}

/// Convert a buffer to plain text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Convert a region of a buffer to plain text.
pub fn buffer_rect_to_string_plain(buffer: &Buffer, area: Rect) -> String {
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y.saturating_add(area.height) {
        let mut line = String::new();
        for x in area.x..area.x.saturating_add(area.width) {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Renders into a fixed-size in-memory terminal.
///
/// # Example
///
/// ```ignore
/// let mut render = RenderHarness::new(60, 20);
/// let output = render.render_to_string_plain(|frame| {
///     sidebar.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("Sidebar"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {}", e));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    ///
    /// # Panics
    ///
    /// Panics if drawing fails.
    pub fn render<F>(&mut self, render_fn: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render_fn)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {}", e));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return it as plain text.
    pub fn render_to_string_plain<F>(&mut self, render_fn: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(render_fn))
    }
}

/// Generic test harness for slice-dispatch applications.
///
/// Provides:
/// - State under test in a plain `state` field
/// - Action channel for capturing emitted actions
/// - Helper methods for emitting and draining actions
pub struct TestHarness<S, A: Action> {
    /// The application state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Emit every action a component returned.
    pub fn emit_all(&self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.emit(action);
        }
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Check if any actions were emitted.
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Records a projection of the state every time listeners are notified.
///
/// # Example
///
/// ```ignore
/// let probe = ListenerProbe::attach(&mut store, |s: &PanelState| s.is_menu_shown());
/// store.dispatch(show_menu(true));
/// assert_eq!(probe.observed(), vec![Some(true)]);
/// ```
pub struct ListenerProbe<T> {
    observed: Rc<RefCell<Vec<T>>>,
    subscription: Subscription,
}

impl<T: Clone + 'static> ListenerProbe<T> {
    /// Subscribe a probe recording `project(state)` on every notification.
    pub fn attach<S, O>(store: &mut O, project: fn(&S) -> T) -> Self
    where
        O: Observable<S> + ?Sized,
        S: 'static,
    {
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        let subscription = store.subscribe_boxed(Box::new(move |state: &S| {
            sink.borrow_mut().push(project(state));
        }));
        Self {
            observed,
            subscription,
        }
    }

    /// Everything observed so far, in notification order.
    pub fn observed(&self) -> Vec<T> {
        self.observed.borrow().clone()
    }

    /// Number of notifications received.
    pub fn calls(&self) -> usize {
        self.observed.borrow().len()
    }

    /// The probe's subscription.
    pub fn subscription(&self) -> Subscription {
        self.subscription
    }
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// let actions = harness.drain_emitted();
/// assert_emitted!(actions, PanelAction::MenuHide);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Find and return the first action matching a pattern.
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
