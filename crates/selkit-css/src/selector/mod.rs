//! CSS selector construction
//!
//! Selectors are assembled one simple selector at a time. Within a compound
//! selector the parts must follow the canonical order
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!          \----/\----/\----------/
//!          may repeat
//! ```
//!
//! and compounds are joined into complex selectors with [`combine`].
//!
//! ```
//! use selkit_css::selector::{element, id};
//!
//! # fn main() -> selkit_css::Result<()> {
//! let selector = id("main").class("container")?.class("editable")?.stringify();
//! assert_eq!(selector, "#main.container.editable");
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

mod builder;
mod combinator;
mod part;

pub use builder::{
    SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element,
};
pub use combinator::Combinator;
pub use part::{Part, PartKind};
