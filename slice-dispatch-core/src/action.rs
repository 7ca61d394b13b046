//! Action traits for type-safe state transitions

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions describe an intent to change state. They should be:
/// - Clone: Actions may be logged or handed to several handlers
/// - Debug: For debugging and logging
/// - Send + 'static: So they can travel over the action channel
///
/// Use `#[derive(Action)]` from `slice-dispatch-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// The action tag, used for logging and filtering
    fn name(&self) -> &'static str;
}

/// Actions grouped into categories by their variant-name prefix
///
/// Generated by `#[derive(Action)]` with `#[action(infer_categories)]`:
/// `SidebarShow` and `SidebarHide` both land in the `"sidebar"` category.
pub trait ActionCategory: Action {
    /// Generated enum listing every discovered category
    type Category: Copy + Eq + Hash + Debug;

    /// Category name, or `None` for uncategorized actions
    fn category(&self) -> Option<&'static str>;

    /// Category as an enum value
    fn category_enum(&self) -> Self::Category;
}
