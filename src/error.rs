use thiserror::Error;

/// Errors raised by the callback based traversals of an [`OrderedTree`][crate::OrderedTree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// The traversal was started without a visitor to call for each node. Nothing was visited.
    #[error("callback required")]
    CallbackRequired,
}
