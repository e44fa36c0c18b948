//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the markup parser to report malformed input it silently absorbed.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recovered problem (prints once per unique message).
///
/// Returns `true` if the message was printed, `false` if it had already been
/// seen since the last [`clear_warnings`].
///
/// # Example
/// ```ignore
/// warn_once("Markup", "unclosed <p> at end of input");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[quire {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call before parsing an unrelated document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_deduplicates() {
        let message = "warning-dedup-probe";
        let _ = warn_once("Test", message);
        assert!(!warn_once("Test", message));
    }

    #[test]
    fn test_component_is_part_of_key() {
        let _ = warn_once("TestA", "shared-component-probe");
        assert!(warn_once("TestB", "shared-component-probe"));
    }
}
