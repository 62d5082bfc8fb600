//! Error types.

use derive_more::{Display, Error};

/// Errors that can occur while registering a route.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum RouteError {
    /// Two different `:param` names were registered at the same position in the trie.
    #[display(
        "cannot set two different :param names at the same path (:{} already registered, got :{})",
        existing,
        conflicting
    )]
    ParamNameConflict {
        /// Name of the parameter already registered at this position.
        existing: String,

        /// Name of the parameter that was rejected.
        conflicting: String,
    },
}
