//! Store configuration errors

/// Errors raised while assembling a store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A slice was registered without an initial value
    #[error("slice `{slice}` has no initial state")]
    MissingInitialState { slice: &'static str },
}
