//! Filter Utilities
//!
//! Case-insensitive substring matching for the filter box.

/// True if `text` contains `query`, ignoring case.
///
/// The empty query matches everything.
pub fn matches_filter(query: &str, text: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}
