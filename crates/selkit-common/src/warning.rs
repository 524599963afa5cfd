//! Terminal warnings with colored output.
//!
//! Provides deduplication so a repeated problem is reported once. Only the
//! command-line front end reports through here; the selector library itself
//! never writes diagnostics.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Messages already printed.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("recipe", "unknown combinator token \">>\"");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_time(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[selkit {component}] warning: {message}").yellow());
    }
}

/// Record `key`, returning `false` if it was already recorded.
///
/// A poisoned lock reports every message.
fn first_time(key: String) -> bool {
    WARNED
        .lock()
        .map(|mut guard| guard.get_or_insert_with(HashSet::new).insert(key))
        .unwrap_or(true)
}

/// Whether `warn_once` has already reported this message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .is_ok_and(|guard| guard.as_ref().is_some_and(|set| set.contains(&key)))
}

/// Report a fatal error. Not deduplicated.
pub fn error(message: &str) {
    eprintln!("{}", format!("[selkit] error: {message}").red().bold());
}

/// Forget all recorded warnings.
pub fn clear_warnings() {
    if let Ok(mut guard) = WARNED.lock() {
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_deduplicated() {
        clear_warnings();
        assert!(first_time("[test] dedup check".to_string()));
        assert!(!first_time("[test] dedup check".to_string()));
        assert!(first_time("[other] dedup check".to_string()));

        clear_warnings();
        assert!(first_time("[test] dedup check".to_string()));

        // The set is global; keep every clear in this one test.
        assert!(!was_warned("lookup", "never reported"));
        warn_once("lookup", "reported once");
        assert!(was_warned("lookup", "reported once"));
    }
}
