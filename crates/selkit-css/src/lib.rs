//! Order-checked CSS selector builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical part order and single-occurrence rules, checked on every append
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining finished selectors with a combinator token
//!
//! - **Recipes**
//!   - A serde description of a selector, loadable from JSON
//!
//! # Not Implemented
//!
//! - Validation of part payloads (attribute syntax, pseudo-class arguments, escaping)
//! - Validation of combinator tokens

/// Errors raised while assembling selectors.
pub mod error;
/// Declarative selector descriptions.
pub mod recipe;
/// Selector parts, combinators and the builder.
pub mod selector;

pub use error::{Result, SelectorError};
