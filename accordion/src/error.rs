//! Configuration errors.

use thiserror::Error;

use crate::group::ItemId;

/// Errors raised while building a group configuration.
///
/// Toggling and rendering never fail; only malformed input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two items in the same list share an id.
    #[error("Duplicate item id '{0}'")]
    DuplicateItemId(ItemId),
}
