//! Incremental selector construction.

use std::collections::HashSet;

use super::part::{Part, PartKind};
use crate::error::{Result, SelectorError};

/// One compound (or combined) selector under construction.
///
/// Parts must arrive in [`PartKind`] order, and element, id and
/// pseudo-element may each appear once. Every append validates before it
/// touches any state, so a rejected call leaves the builder usable.
///
/// [`stringify`](Self::stringify) consumes the builder; a finished selector
/// cannot be extended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Literal output tokens, in emission order.
    fragments: Vec<String>,
    /// Kind of the most recent append, `None` until the first one.
    last_kind: Option<PartKind>,
    /// Kinds appended so far.
    seen: HashSet<PartKind>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a compound selector from parts in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] raised by [`append`](Self::append).
    pub fn from_parts(parts: impl IntoIterator<Item = Part>) -> Result<Self> {
        let mut builder = Self::new();
        for part in parts {
            let _ = builder.append(part)?;
        }
        Ok(builder)
    }

    /// Start a builder with a part that cannot violate any rule.
    fn starting_with(part: Part) -> Self {
        let mut builder = Self::new();
        builder.record(part);
        builder
    }

    /// Append a part, checking uniqueness and then ordering.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateKind`] if an element, id or pseudo-element
    ///   is already present.
    /// - [`SelectorError::OutOfOrder`] if `part` ranks below the previous part.
    ///
    /// On error nothing is changed.
    pub fn append(&mut self, part: Part) -> Result<&mut Self> {
        self.check(part.kind())?;
        self.record(part);
        Ok(self)
    }

    /// Append a type selector: `div`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.with(Part::Element(value.into()))
    }

    /// Append an id selector: `#main`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.with(Part::Id(value.into()))
    }

    /// Append a class selector: `.container`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.with(Part::Class(value.into()))
    }

    /// Append an attribute selector: `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.with(Part::Attribute(value.into()))
    }

    /// Append a pseudo-class: `:focus`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.with(Part::PseudoClass(value.into()))
    }

    /// Append a pseudo-element: `::before`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.with(Part::PseudoElement(value.into()))
    }

    /// Kind of the most recent append.
    #[must_use]
    pub const fn last_kind(&self) -> Option<PartKind> {
        self.last_kind
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Finish the selector and return its text.
    ///
    /// An empty builder yields an empty string.
    #[must_use]
    pub fn stringify(self) -> String {
        self.fragments.concat()
    }

    fn with(mut self, part: Part) -> Result<Self> {
        let _ = self.append(part)?;
        Ok(self)
    }

    fn check(&self, kind: PartKind) -> Result<()> {
        if !kind.is_repeatable() && self.seen.contains(&kind) {
            return Err(SelectorError::DuplicateKind { kind });
        }
        match self.last_kind {
            // Same-kind repeats compare equal and pass.
            Some(previous) if kind < previous => Err(SelectorError::OutOfOrder { kind, previous }),
            _ => Ok(()),
        }
    }

    fn record(&mut self, part: Part) {
        let kind = part.kind();
        self.fragments.extend(part.fragments());
        self.last_kind = Some(kind);
        let _ = self.seen.insert(kind);
    }
}

/// Start a selector with a type selector.
#[must_use]
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Part::Element(value.into()))
}

/// Start a selector with an id selector.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Part::Id(value.into()))
}

/// Start a selector with a class selector.
#[must_use]
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Part::Class(value.into()))
}

/// Start a selector with an attribute selector.
#[must_use]
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Part::Attribute(value.into()))
}

/// Start a selector with a pseudo-class.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Part::PseudoClass(value.into()))
}

/// Start a selector with a pseudo-element.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Part::PseudoElement(value.into()))
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Join two finished selectors with a combinator token, rendered as
/// `left + " " + combinator + " " + right`. The token is copied verbatim, so
/// the descendant combinator `" "` produces three spaces.
///
/// The result keeps the kind state of `right`, the subject compound: further
/// appends extend it under the usual ordering and uniqueness rules, and the
/// result can itself be combined again.
///
/// ```
/// use selkit_css::selector::{combine, element};
///
/// let selector = combine(element("ul"), ">", element("li")).stringify();
/// assert_eq!(selector, "ul > li");
/// ```
#[must_use]
pub fn combine(left: SelectorBuilder, combinator: &str, right: SelectorBuilder) -> SelectorBuilder {
    let SelectorBuilder {
        fragments,
        last_kind,
        seen,
    } = right;

    SelectorBuilder {
        fragments: vec![
            left.stringify(),
            " ".to_owned(),
            combinator.to_owned(),
            " ".to_owned(),
            fragments.concat(),
        ],
        last_kind,
        seen,
    }
}
