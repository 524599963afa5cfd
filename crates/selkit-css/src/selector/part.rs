//! Selector part kinds and their rendered punctuation.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "If it contains a type selector or universal selector, that selector must
//! come first in the sequence."
//!
//! This builder is stricter than the grammar: every kind has a fixed rank and
//! a compound must list its parts in rank order.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The category of a simple selector inside a compound selector.
///
/// Variants are declared in canonical order, so the derived `Ord` is the
/// ordering a compound selector must follow:
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6.3 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl PartKind {
    /// Every kind, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the canonical order, starting at 1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether this kind may occur more than once in one compound selector.
    ///
    /// Element, id and pseudo-element are limited to a single occurrence.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// A single simple selector with its raw payload.
///
/// Payloads are opaque: they are copied into the output verbatim, without
/// escaping or validation.
///
/// Serializes externally tagged, e.g. `{"pseudo_class": "focus"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Type selector, rendered as the bare value.
    Element(String),
    /// Rendered as `#value`.
    Id(String),
    /// Rendered as `.value`.
    Class(String),
    /// Rendered as `[value]`. Tagged `attr` in serialized form.
    #[serde(rename = "attr")]
    Attribute(String),
    /// Rendered as `:value`.
    PseudoClass(String),
    /// Rendered as `::value`.
    PseudoElement(String),
}

impl Part {
    /// Create a part of the given kind.
    #[must_use]
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            PartKind::Element => Self::Element(value),
            PartKind::Id => Self::Id(value),
            PartKind::Class => Self::Class(value),
            PartKind::Attribute => Self::Attribute(value),
            PartKind::PseudoClass => Self::PseudoClass(value),
            PartKind::PseudoElement => Self::PseudoElement(value),
        }
    }

    /// The kind of this part.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        match self {
            Self::Element(_) => PartKind::Element,
            Self::Id(_) => PartKind::Id,
            Self::Class(_) => PartKind::Class,
            Self::Attribute(_) => PartKind::Attribute,
            Self::PseudoClass(_) => PartKind::PseudoClass,
            Self::PseudoElement(_) => PartKind::PseudoElement,
        }
    }

    /// The raw payload.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Element(value)
            | Self::Id(value)
            | Self::Class(value)
            | Self::Attribute(value)
            | Self::PseudoClass(value)
            | Self::PseudoElement(value) => value,
        }
    }

    /// The literal tokens this part contributes to the output, in order.
    #[must_use]
    pub fn fragments(self) -> Vec<String> {
        match self {
            Self::Element(value) => vec![value],
            Self::Id(value) => vec!["#".to_owned(), value],
            Self::Class(value) => vec![".".to_owned(), value],
            Self::Attribute(value) => vec!["[".to_owned(), value, "]".to_owned()],
            Self::PseudoClass(value) => vec![":".to_owned(), value],
            Self::PseudoElement(value) => vec!["::".to_owned(), value],
        }
    }
}
