#![forbid(unsafe_code)]

//! In-memory page: a search field and a table without a display surface.
//!
//! Used by the test suites and by native callers that want the filter's
//! decisions without a browser. `None` for either element models a page that
//! does not carry it.

use crate::error::{FilterError, Result};
use crate::filter::FilterConfig;
use crate::source::{QuerySource, RowSource, Visibility};

/// One table row: its rendered text and its `display` style value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRow {
    pub text: String,
    pub display: String,
}

impl MemoryRow {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: String::new(),
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        Visibility::from_display_value(&self.display)
    }
}

#[derive(Debug, Clone)]
pub struct MemoryPage {
    input_id: String,
    table_id: String,
    input: Option<String>,
    table: Option<Vec<MemoryRow>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::for_config(&FilterConfig::default())
    }
}

impl MemoryPage {
    /// Empty search box and empty table, named after `config`'s element ids.
    #[must_use]
    pub fn for_config(config: &FilterConfig) -> Self {
        Self {
            input_id: config.input_id.clone(),
            table_id: config.table_id.clone(),
            input: Some(String::new()),
            table: Some(Vec::new()),
        }
    }

    /// A page whose table holds `rows` (header first), all visible.
    #[must_use]
    pub fn with_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: Some(rows.into_iter().map(MemoryRow::new).collect()),
            ..Self::default()
        }
    }

    /// Type into the search box (recreating it if it was removed).
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.input = Some(value.into());
    }

    pub fn remove_input(&mut self) {
        self.input = None;
    }

    pub fn remove_table(&mut self) {
        self.table = None;
    }

    /// Overwrite a row's `display` value directly, as page code might.
    pub fn set_display(&mut self, index: usize, display: impl Into<String>) {
        if let Some(row) = self.table.as_mut().and_then(|rows| rows.get_mut(index)) {
            row.display = display.into();
        }
    }

    #[must_use]
    pub fn table_rows(&self) -> &[MemoryRow] {
        self.table.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        self.table_rows().get(index).map(MemoryRow::visibility)
    }

    /// Texts of rendered rows, in table order.
    #[must_use]
    pub fn visible_texts(&self) -> Vec<&str> {
        self.texts_where(Visibility::Shown)
    }

    /// Texts of hidden rows, in table order.
    #[must_use]
    pub fn hidden_texts(&self) -> Vec<&str> {
        self.texts_where(Visibility::Hidden)
    }

    fn row(&self, index: usize) -> Result<&MemoryRow> {
        self.table_rows()
            .get(index)
            .ok_or_else(|| FilterError::host(format!("row {index} no longer exists")))
    }

    fn texts_where(&self, visibility: Visibility) -> Vec<&str> {
        self.table_rows()
            .iter()
            .filter(|row| row.visibility() == visibility)
            .map(|row| row.text.as_str())
            .collect()
    }
}

impl QuerySource for MemoryPage {
    fn read_query(&self) -> Result<String> {
        self.input.clone().ok_or_else(|| FilterError::MissingInput {
            id: self.input_id.clone(),
        })
    }
}

impl RowSource for MemoryPage {
    type Row = usize;

    fn rows(&mut self) -> Result<Vec<usize>> {
        let rows = self.table.as_ref().ok_or_else(|| FilterError::MissingTable {
            id: self.table_id.clone(),
        })?;
        Ok((0..rows.len()).collect())
    }

    fn row_text(&self, row: &usize) -> Result<String> {
        self.row(*row).map(|row| row.text.clone())
    }

    fn set_visibility(&mut self, row: &usize, visibility: Visibility) -> Result<()> {
        let index = *row;
        let row = self
            .table
            .as_mut()
            .and_then(|rows| rows.get_mut(index))
            .ok_or_else(|| FilterError::host(format!("row {index} no longer exists")))?;
        row.display = visibility.display_value().to_string();
        Ok(())
    }
}
