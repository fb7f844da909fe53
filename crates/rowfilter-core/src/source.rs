#![forbid(unsafe_code)]

//! Host traits: where the query comes from and where the rows live.
//!
//! The filter never reaches for ambient page state. A host (the live DOM in
//! `rowfilter-web`, [`MemoryPage`](crate::memory::MemoryPage) in tests) hands
//! it a query and a row collection, and applies the visibility it decides.
//! The host owns the rows: the filter only reads text and writes visibility,
//! it never creates, removes or reorders anything.

use crate::error::Result;

/// Display state of one row.
///
/// Maps onto the CSS `display` property: [`Visibility::Shown`] clears it back
/// to the default layout (`""`), [`Visibility::Hidden`] sets `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    const HIDDEN_DISPLAY: &'static str = "none";

    #[must_use]
    pub const fn from_match(matched: bool) -> Self {
        if matched { Self::Shown } else { Self::Hidden }
    }

    /// Value written to the row's `display` style property.
    #[must_use]
    pub const fn display_value(self) -> &'static str {
        match self {
            Self::Shown => "",
            Self::Hidden => Self::HIDDEN_DISPLAY,
        }
    }

    /// Read back a `display` value. Anything other than `"none"` renders.
    #[must_use]
    pub fn from_display_value(value: &str) -> Self {
        if value.trim() == Self::HIDDEN_DISPLAY {
            Self::Hidden
        } else {
            Self::Shown
        }
    }

    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Source of the raw search text (the search box).
pub trait QuerySource {
    /// Current value of the search field, as typed.
    ///
    /// Returns [`FilterError::MissingInput`](crate::FilterError::MissingInput)
    /// when the page has no such field.
    fn read_query(&self) -> Result<String>;
}

/// The table's rows, in document order, header first.
pub trait RowSource {
    /// Opaque handle to one row, owned by the host.
    type Row;

    /// All rows of the target table, including the header at index 0.
    ///
    /// Returns [`FilterError::MissingTable`](crate::FilterError::MissingTable)
    /// when the page has no such table.
    fn rows(&mut self) -> Result<Vec<Self::Row>>;

    /// Full rendered text of `row`.
    fn row_text(&self, row: &Self::Row) -> Result<String>;

    /// Apply `visibility` to `row`.
    fn set_visibility(&mut self, row: &Self::Row, visibility: Visibility) -> Result<()>;
}
