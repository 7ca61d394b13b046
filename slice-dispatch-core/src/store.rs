//! Centralized state store with reducer pattern

use crate::Action;
use std::marker::PhantomData;

/// A pure reducer: computes the next state from the current one and an action
///
/// Returns `None` when the action leaves the state unchanged, so the caller
/// can keep the current value without allocating. The input is never mutated.
pub type Reducer<S, A> = fn(&S, &A) -> Option<S>;

/// Callback invoked after every dispatch with the new state
pub type Listener<S> = Box<dyn FnMut(&S)>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

impl Subscription {
    /// Raw identifier, unique per store
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Read access plus change notification over a state container
///
/// Implemented by [`Store`] and [`StoreWithMiddleware`] so connectors can
/// attach to either.
pub trait Observable<S> {
    /// Current state
    fn state(&self) -> &S;

    /// Register a boxed listener
    fn subscribe_boxed(&mut self, listener: Listener<S>) -> Subscription;

    /// Remove a listener, returning whether it was registered
    fn unsubscribe(&mut self, subscription: Subscription) -> bool;
}

/// Centralized state store with Redux-like reducer pattern
///
/// The store owns exactly one state value and replaces it on every dispatch
/// that changes it. There is no mutable accessor: the only way to a new
/// state is through the reducer.
///
/// # Type Parameters
/// * `S` - The application state type
/// * `A` - The action type (must implement `Action`)
///
/// # Example
/// ```ignore
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: i32,
/// }
///
/// #[derive(Action, Clone, Debug)]
/// enum MyAction {
///     Increment,
///     Decrement,
/// }
///
/// fn reducer(state: &AppState, action: &MyAction) -> Option<AppState> {
///     match action {
///         MyAction::Increment => Some(AppState { counter: state.counter + 1 }),
///         MyAction::Decrement => Some(AppState { counter: state.counter - 1 }),
///     }
/// }
///
/// let mut store = Store::new(AppState::default(), reducer);
/// store.subscribe(|state: &AppState| println!("counter = {}", state.counter));
/// store.dispatch(MyAction::Increment);
/// assert_eq!(store.state().counter, 1);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    listeners: Vec<(Subscription, Listener<S>)>,
    next_subscription: u64,
    _marker: PhantomData<A>,
}

impl<S, A: Action> std::fmt::Debug for Store<S, A>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners_count", &self.listeners.len())
            .finish()
    }
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            listeners: Vec::new(),
            next_subscription: 0,
            _marker: PhantomData,
        }
    }

    /// Create a store and run the reducer once with `init`
    ///
    /// `init` is expected to be an action no reducer reacts to; running it
    /// still gives every reducer a chance to normalize its initial state.
    /// No listener exists yet, so nobody is notified.
    pub fn with_init(state: S, reducer: Reducer<S, A>, init: A) -> Self {
        let state = reducer(&state, &init).unwrap_or(state);
        Self::new(state, reducer)
    }

    /// Dispatch an action to the store
    ///
    /// The next state is computed in full before it replaces the current
    /// one, so a reducer that panics leaves the previous state in place.
    /// Listeners run after the replacement, once each, in registration
    /// order, whether or not the state changed. A panicking listener
    /// unwinds to the caller and the remaining listeners are skipped.
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let changed = match (self.reducer)(&self.state, &action) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        };
        self.notify();
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Register a listener called after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&S) + 'static,
    {
        self.subscribe_boxed(Box::new(listener))
    }

    /// Register an already boxed listener
    pub fn subscribe_boxed(&mut self, listener: Listener<S>) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, listener));
        tracing::trace!(subscription = subscription.id(), "Listener subscribed");
        subscription
    }

    /// Remove a listener
    ///
    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::trace!(subscription = subscription.id(), "Listener unsubscribed");
        }
        removed
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl<S, A: Action> Observable<S> for Store<S, A> {
    fn state(&self) -> &S {
        Store::state(self)
    }

    fn subscribe_boxed(&mut self, listener: Listener<S>) -> Subscription {
        Store::subscribe_boxed(self, listener)
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        Store::unsubscribe(self, subscription)
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and allows middleware to intercept actions
/// before and after they are processed by the reducer.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self::from_store(Store::new(state, reducer), middleware)
    }

    /// Wrap an existing store
    pub fn from_store(store: Store<S, A>, middleware: M) -> Self {
        Self { store, middleware }
    }

    /// Dispatch an action through middleware and store
    ///
    /// `after` is not called when the reducer or a listener panics.
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Register a listener called after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&S) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Remove a listener
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.store.unsubscribe(subscription)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.store.listener_count()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

impl<S, A: Action, M: Middleware<A>> Observable<S> for StoreWithMiddleware<S, A, M> {
    fn state(&self) -> &S {
        self.store.state()
    }

    fn subscribe_boxed(&mut self, listener: Listener<S>) -> Subscription {
        self.store.subscribe_boxed(listener)
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.store.unsubscribe(subscription)
    }
}

/// Hooks around every dispatch
///
/// `before` sees the action ahead of the reducer; `after` runs once the
/// state was replaced and every listener notified.
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    fn after(&mut self, action: &A, state_changed: bool);
}

/// Logs every dispatch through `tracing` at debug level
///
/// By default only the outcome is logged; [`LoggingMiddleware::verbose`]
/// also logs the action before the reducer runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware {
    verbose: bool,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.verbose {
            tracing::debug!(action = action.name(), ?action, "Dispatching");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = action.name(), state_changed, "Dispatched");
    }
}

/// Two middlewares run as one: `outer` wraps `inner`
///
/// `before` hooks run outer first, `after` hooks inner first, so the outer
/// middleware observes the whole dispatch including the inner one's work.
/// Nest compositions for more than two.
#[derive(Debug, Clone, Default)]
pub struct ComposedMiddleware<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> ComposedMiddleware<Outer, Inner> {
    pub fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    pub fn outer(&self) -> &Outer {
        &self.outer
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }
}

impl<A, Outer, Inner> Middleware<A> for ComposedMiddleware<Outer, Inner>
where
    A: Action,
    Outer: Middleware<A>,
    Inner: Middleware<A>,
{
    fn before(&mut self, action: &A) {
        self.outer.before(action);
        self.inner.before(action);
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        self.inner.after(action, state_changed);
        self.outer.after(action, state_changed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        counter: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        Explode,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Decrement => "Decrement",
                TestAction::NoOp => "NoOp",
                TestAction::Explode => "Explode",
            }
        }
    }

    fn test_reducer(state: &TestState, action: &TestAction) -> Option<TestState> {
        match action {
            TestAction::Increment => Some(TestState {
                counter: state.counter + 1,
            }),
            TestAction::Decrement => Some(TestState {
                counter: state.counter - 1,
            }),
            TestAction::NoOp => None,
            TestAction::Explode => panic!("reducer failure"),
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.state().counter, 1);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.state().counter, 2);

        assert!(store.dispatch(TestAction::Decrement));
        assert_eq!(store.state().counter, 1);
    }

    #[test]
    fn test_store_noop() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(!store.dispatch(TestAction::NoOp));
        assert_eq!(store.state().counter, 0);
    }

    #[test]
    fn test_with_init_runs_reducer_once() {
        let store = Store::with_init(TestState::default(), test_reducer, TestAction::Increment);
        assert_eq!(store.state().counter, 1);

        let store = Store::with_init(TestState { counter: 7 }, test_reducer, TestAction::NoOp);
        assert_eq!(store.state().counter, 7);
    }

    #[test]
    fn test_listeners_called_once_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(TestState::default(), test_reducer);

        for name in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            store.subscribe(move |state: &TestState| {
                calls.borrow_mut().push((name, state.counter));
            });
        }

        store.dispatch(TestAction::Increment);

        assert_eq!(
            *calls.borrow(),
            vec![("first", 1), ("second", 1), ("third", 1)]
        );
    }

    #[test]
    fn test_listeners_notified_on_unchanged_dispatch() {
        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new(TestState::default(), test_reducer);
        let seen = Rc::clone(&count);
        store.subscribe(move |_: &TestState| *seen.borrow_mut() += 1);

        store.dispatch(TestAction::NoOp);
        store.dispatch(TestAction::NoOp);

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new(TestState::default(), test_reducer);
        let seen = Rc::clone(&count);
        let subscription = store.subscribe(move |_: &TestState| *seen.borrow_mut() += 1);

        store.dispatch(TestAction::Increment);
        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.dispatch(TestAction::Increment);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_subscription_ids_are_not_reused() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let first = store.subscribe(|_: &TestState| {});
        store.unsubscribe(first);
        let second = store.subscribe(|_: &TestState| {});
        assert_ne!(first, second);
    }

    #[test]
    fn test_panicking_reducer_keeps_previous_state() {
        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new(TestState::default(), test_reducer);
        let seen = Rc::clone(&count);
        store.subscribe(move |_: &TestState| *seen.borrow_mut() += 1);
        store.dispatch(TestAction::Increment);

        let result = catch_unwind(AssertUnwindSafe(|| {
            store.dispatch(TestAction::Explode);
        }));

        assert!(result.is_err());
        assert_eq!(store.state().counter, 1);
        // Listeners are not told about a dispatch that never completed
        assert_eq!(*count.borrow(), 1);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.state().counter, 2);
    }

    #[test]
    fn test_panicking_listener_propagates_and_skips_rest() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(TestState::default(), test_reducer);

        let first = Rc::clone(&calls);
        store.subscribe(move |_: &TestState| first.borrow_mut().push("first"));
        store.subscribe(|state: &TestState| {
            if state.counter == 1 {
                panic!("listener failure");
            }
        });
        let third = Rc::clone(&calls);
        store.subscribe(move |_: &TestState| third.borrow_mut().push("third"));

        let result = catch_unwind(AssertUnwindSafe(|| {
            store.dispatch(TestAction::Increment);
        }));

        assert!(result.is_err());
        // The swap happened before notification
        assert_eq!(store.state().counter, 1);
        assert_eq!(*calls.borrow(), vec!["first"]);

        store.dispatch(TestAction::Increment);
        assert_eq!(*calls.borrow(), vec!["first", "first", "third"]);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            self.after_count += 1;
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::NoOp);

        assert_eq!(store.middleware().before_count, 3);
        assert_eq!(store.middleware().after_count, 3);
        assert_eq!(store.middleware().changed_count, 2);
        assert_eq!(store.state().counter, 2);
    }

    #[test]
    fn test_middleware_store_notifies_listeners() {
        let count = Rc::new(RefCell::new(0));
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            LoggingMiddleware::verbose(),
        );
        let seen = Rc::clone(&count);
        let subscription = store.subscribe(move |_: &TestState| *seen.borrow_mut() += 1);

        store.dispatch(TestAction::Increment);
        assert!(store.unsubscribe(subscription));
        store.dispatch(TestAction::Increment);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_composed_middleware_nests_hooks() {
        struct Recorder {
            name: &'static str,
            log: Rc<RefCell<Vec<String>>>,
        }

        impl<A: Action> Middleware<A> for Recorder {
            fn before(&mut self, _action: &A) {
                self.log.borrow_mut().push(format!("before:{}", self.name));
            }

            fn after(&mut self, _action: &A, _state_changed: bool) {
                self.log.borrow_mut().push(format!("after:{}", self.name));
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let recorder = |name| Recorder {
            name,
            log: Rc::clone(&log),
        };
        let composed = ComposedMiddleware::new(
            recorder("a"),
            ComposedMiddleware::new(recorder("b"), recorder("c")),
        );

        let mut store = StoreWithMiddleware::new(TestState::default(), test_reducer, composed);
        store.dispatch(TestAction::Increment);

        assert_eq!(
            *log.borrow(),
            vec!["before:a", "before:b", "before:c", "after:c", "after:b", "after:a"]
        );
        assert_eq!(store.middleware().outer().name, "a");
        assert_eq!(store.middleware().inner().inner().name, "c");
    }

    #[test]
    fn test_logging_middleware_modes() {
        assert!(!LoggingMiddleware::new().is_verbose());
        assert!(LoggingMiddleware::verbose().is_verbose());
    }
}
