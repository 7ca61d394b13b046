//! Composition of independent slice reducers into one root reducer
//!
//! Each slice owns a piece of state and a [`Reducer`] for it. The
//! [`combine_reducers!`](crate::combine_reducers) macro declares a composite
//! state struct with one `Arc` field per slice and derives the root reducer:
//! every action goes to every slice, a slice that returns `None` keeps its
//! `Arc` (shared with the previous composite), and the composite itself is
//! only rebuilt when at least one slice changed.
//!
//! Slices never see each other's state.

use std::sync::Arc;

use crate::store::Reducer;

/// A composite state built from independent slices
///
/// Implemented by [`combine_reducers!`](crate::combine_reducers); use the
/// associated [`reduce`](CombinedState::reduce) as the store reducer.
pub trait CombinedState: Sized {
    /// The action type every slice reducer receives
    type Action;

    /// Slice names in declaration order
    const SLICES: &'static [&'static str];

    /// Run every slice reducer, returning `None` if no slice changed
    fn reduce(&self, action: &Self::Action) -> Option<Self>;

    /// Names of slices whose value is not shared with `previous`
    fn changed_slices(&self, previous: &Self) -> Vec<&'static str>;
}

/// Apply one slice reducer, keeping the current `Arc` when nothing changed
///
/// Sets `changed` when the reducer produced a new value.
pub fn reduce_slice<T, A>(
    current: &Arc<T>,
    action: &A,
    reducer: Reducer<T, A>,
    changed: &mut bool,
) -> Arc<T> {
    match reducer(current, action) {
        Some(next) => {
            *changed = true;
            Arc::new(next)
        }
        None => Arc::clone(current),
    }
}

/// Declare a composite state over independent slices
///
/// Generates:
/// - the composite struct, one `pub field: Arc<SliceState>` per slice
/// - a builder with one setter per slice and a fallible `build()`
/// - a [`CombinedState`] implementation (the root reducer)
///
/// `build()` fails with [`StoreError::MissingInitialState`](crate::StoreError)
/// naming the first slice that was never given an initial value.
///
/// # Example
/// ```ignore
/// combine_reducers! {
///     /// Everything the shell renders
///     pub struct PanelState / PanelStateBuilder, action = PanelAction {
///         sidebar: SidebarState => sidebar_reducer,
///         menu: MenuState => menu_reducer,
///     }
/// }
///
/// let state = PanelState::builder()
///     .sidebar(SidebarState::default())
///     .menu(MenuState::default())
///     .build()?;
/// let store = Store::new(state, PanelState::reduce);
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $builder:ident, action = $action:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $slice:ty => $reducer:path
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::std::sync::Arc<$slice>,
            )+
        }

        #[doc = concat!("Builder collecting the initial slices of [`", stringify!($name), "`].")]
        #[derive(Debug, Default)]
        $vis struct $builder {
            $( $field: ::core::option::Option<$slice>, )+
        }

        impl $builder {
            $(
                #[doc = concat!("Initial value of the `", stringify!($field), "` slice.")]
                pub fn $field(mut self, initial: $slice) -> Self {
                    self.$field = ::core::option::Option::Some(initial);
                    self
                }
            )+

            /// Assemble the composite, failing on the first missing slice.
            pub fn build(self) -> ::core::result::Result<$name, $crate::StoreError> {
                ::core::result::Result::Ok($name {
                    $(
                        $field: ::std::sync::Arc::new(self.$field.ok_or(
                            $crate::StoreError::MissingInitialState {
                                slice: stringify!($field),
                            },
                        )?),
                    )+
                })
            }
        }

        impl $name {
            /// Start collecting initial slices.
            pub fn builder() -> $builder {
                <$builder as ::core::default::Default>::default()
            }

            /// Root reducer, usable as a store reducer.
            pub fn reduce(&self, action: &$action) -> ::core::option::Option<Self> {
                <Self as $crate::combine::CombinedState>::reduce(self, action)
            }
        }

        impl $crate::combine::CombinedState for $name {
            type Action = $action;

            const SLICES: &'static [&'static str] = &[$(stringify!($field)),+];

            fn reduce(&self, action: &$action) -> ::core::option::Option<Self> {
                let mut changed = false;
                $(
                    let $field = $crate::combine::reduce_slice(
                        &self.$field,
                        action,
                        $reducer,
                        &mut changed,
                    );
                )+
                if changed {
                    ::core::option::Option::Some(Self { $($field),+ })
                } else {
                    ::core::option::Option::None
                }
            }

            fn changed_slices(&self, previous: &Self) -> ::std::vec::Vec<&'static str> {
                let mut changed = ::std::vec::Vec::new();
                $(
                    if !::std::sync::Arc::ptr_eq(&self.$field, &previous.$field) {
                        changed.push(stringify!($field));
                    }
                )+
                changed
            }
        }
    };
}
