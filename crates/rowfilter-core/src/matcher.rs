#![forbid(unsafe_code)]

//! Case-insensitive substring matching of row text against a search query.
//!
//! Both sides are lowercased with the full Unicode lowercase mapping (the same
//! mapping a browser applies for `String.prototype.toLowerCase`), so `"ÉCOLE"`
//! and `"école"` are the same query. An empty query matches every row.
//!
//! # Example
//! ```
//! use rowfilter_core::matcher::Query;
//!
//! let query = Query::new("CODE");
//! assert!(query.matches("Clean Code"));
//! assert!(!query.matches("Refactoring"));
//! assert!(Query::new("").matches("anything"));
//! ```

/// A lowercased search query, read fresh for each filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    lowered: String,
}

impl Query {
    /// Lowercase `raw` once so each row comparison only lowers the row text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            lowered: raw.to_lowercase(),
        }
    }

    /// The lowercased query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Whether `text` contains this query, ignoring case.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        if self.lowered.is_empty() {
            return true;
        }
        text.to_lowercase().contains(&self.lowered)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One-shot form of [`Query::matches`].
#[must_use]
pub fn row_matches(query: &str, text: &str) -> bool {
    Query::new(query).matches(text)
}
