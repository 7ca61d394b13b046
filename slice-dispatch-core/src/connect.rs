//! Connectors: derived props kept in sync with a store
//!
//! A connector pairs a selector (`fn(&S) -> P`) with a store subscription.
//! After every dispatch the selector runs against the new state; the cached
//! props are replaced and flagged as changed only when they differ from the
//! previous ones. Containers read the props when building a component's
//! props and check [`Connected::take_changed`] to decide whether to redraw.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::store::{Observable, Subscription};

/// Selector deriving a component's data from the whole state
pub type Selector<S, P> = fn(&S) -> P;

struct Slot<P> {
    props: P,
    changed: bool,
}

/// Props derived from a store, refreshed after every dispatch
pub struct Connected<P> {
    slot: Rc<RefCell<Slot<P>>>,
    subscription: Subscription,
}

impl<P: std::fmt::Debug> std::fmt::Debug for Connected<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Connected")
            .field("props", &slot.props)
            .field("changed", &slot.changed)
            .field("subscription", &self.subscription)
            .finish()
    }
}

/// Subscribe `select` to `store`
///
/// The props are computed immediately from the current state and start out
/// flagged as changed, so the first frame always renders.
pub fn connect<S, P, O>(store: &mut O, select: Selector<S, P>) -> Connected<P>
where
    O: Observable<S> + ?Sized,
    P: PartialEq + 'static,
    S: 'static,
{
    let slot = Rc::new(RefCell::new(Slot {
        props: select(store.state()),
        changed: true,
    }));

    let listener_slot = Rc::clone(&slot);
    let subscription = store.subscribe_boxed(Box::new(move |state: &S| {
        let next = select(state);
        let mut slot = listener_slot.borrow_mut();
        if slot.props != next {
            slot.props = next;
            slot.changed = true;
        }
    }));

    Connected { slot, subscription }
}

impl<P> Connected<P> {
    /// Current derived props
    pub fn props(&self) -> Ref<'_, P> {
        Ref::map(self.slot.borrow(), |slot| &slot.props)
    }

    /// Whether props changed since the last call, clearing the flag
    pub fn take_changed(&self) -> bool {
        std::mem::take(&mut self.slot.borrow_mut().changed)
    }

    /// Whether props changed, without clearing the flag
    pub fn is_changed(&self) -> bool {
        self.slot.borrow().changed
    }

    /// The store subscription backing this connector
    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    /// Stop following the store
    pub fn disconnect<S, O>(self, store: &mut O) -> bool
    where
        O: Observable<S> + ?Sized,
    {
        store.unsubscribe(self.subscription)
    }
}

impl<P: Clone> Connected<P> {
    /// Copy of the current props
    pub fn get(&self) -> P {
        self.slot.borrow().props.clone()
    }
}
