//! Common utilities for the selkit tools.
//!
//! - **Warning System** - deduplicated, colored terminal diagnostics

pub mod warning;
