//! Declarative selector descriptions.
//!
//! A recipe is a tree: leaves are compound selectors given as ordered parts,
//! inner nodes join two recipes with a combinator. Recipes are plain serde
//! data, so they can be written by hand as JSON:
//!
//! ```json
//! {
//!   "combine": {
//!     "left": { "compound": [{ "element": "ul" }, { "class": "nav" }] },
//!     "combinator": ">",
//!     "right": { "compound": [{ "element": "li" }] }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SelectorError;
use crate::selector::{Part, SelectorBuilder, combine};

/// Errors from loading or building a recipe.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The input was not a valid recipe document.
    #[error("invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A compound in the recipe broke the ordering or uniqueness rules.
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// A selector described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipe {
    /// A compound selector, parts in the order they are appended.
    Compound(Vec<Part>),

    /// Two selectors joined by a combinator token.
    Combine {
        /// Rendered before the combinator.
        left: Box<Recipe>,
        /// Copied verbatim between the two selectors.
        combinator: String,
        /// Rendered after the combinator.
        right: Box<Recipe>,
    },
}

impl Recipe {
    /// Replay the recipe through a [`SelectorBuilder`].
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] raised by any compound.
    pub fn build(&self) -> Result<SelectorBuilder, SelectorError> {
        match self {
            Self::Compound(parts) => SelectorBuilder::from_parts(parts.iter().cloned()),
            Self::Combine {
                left,
                combinator,
                right,
            } => Ok(combine(left.build()?, combinator, right.build()?)),
        }
    }

    /// Every combinator token in the recipe, left to right.
    #[must_use]
    pub fn combinators(&self) -> Vec<&str> {
        let mut tokens = Vec::new();
        self.collect_combinators(&mut tokens);
        tokens
    }

    fn collect_combinators<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        if let Self::Combine {
            left,
            combinator,
            right,
        } = self
        {
            left.collect_combinators(tokens);
            tokens.push(combinator);
            right.collect_combinators(tokens);
        }
    }
}

/// Parse a recipe from JSON.
///
/// # Errors
///
/// Returns [`RecipeError::Json`] if the input is not a recipe document.
pub fn from_json(input: &str) -> Result<Recipe, RecipeError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a recipe from JSON and render it.
///
/// # Errors
///
/// Returns [`RecipeError::Json`] for malformed input and
/// [`RecipeError::Selector`] if a compound breaks the ordering rules.
pub fn render_json(input: &str) -> Result<String, RecipeError> {
    Ok(from_json(input)?.build()?.stringify())
}
