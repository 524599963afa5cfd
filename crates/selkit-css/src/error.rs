//! Errors raised while assembling selectors.

use thiserror::Error;

use crate::selector::PartKind;

/// A rejected append. The builder is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector ({kind} repeated)"
    )]
    DuplicateKind {
        /// The kind that was repeated.
        kind: PartKind,
    },

    /// A part was appended after a part of a higher-ranked kind.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {previous})"
    )]
    OutOfOrder {
        /// The kind that was rejected.
        kind: PartKind,
        /// The most recently appended kind.
        previous: PartKind,
    },
}

/// Result alias for selector construction.
pub type Result<T, E = SelectorError> = std::result::Result<T, E>;
