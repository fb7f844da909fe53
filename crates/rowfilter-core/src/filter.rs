#![forbid(unsafe_code)]

//! The filter pass: read the query, walk the rows, toggle visibility.
//!
//! A pass is synchronous and keeps no memory between calls. Re-running it with
//! the same query over unchanged rows writes the same visibility again, so the
//! host is free to call it on every keystroke.
//!
//! Leading header rows (one by default) are skipped and never written. Every
//! other row is shown iff its lowercased text contains the lowercased query.
//!
//! [`RowFilter::try_filter_rows`] propagates host errors. [`RowFilter::filter_rows`]
//! is what event handlers call: a page without the search box or the table is
//! not an error worth surfacing, so the pass becomes a logged no-op.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{FilterError, Result};
use crate::matcher::Query;
use crate::source::{QuerySource, RowSource, Visibility};

/// Where the filter finds its inputs on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Element id of the search text field.
    pub input_id: String,
    /// Element id of the table whose rows are filtered.
    pub table_id: String,
    /// Leading rows (column labels) that are always left visible.
    pub header_rows: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_id: "search".to_string(),
            table_id: "bookTable".to_string(),
            header_rows: 1,
        }
    }
}

impl FilterConfig {
    /// Parse a (possibly partial) JSON object; absent fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Why a pass stopped before reaching the end of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    MissingInput { id: String },
    MissingTable { id: String },
    HostError { message: String },
}

impl From<&FilterError> for SkipReason {
    fn from(err: &FilterError) -> Self {
        match err {
            FilterError::MissingInput { id } => Self::MissingInput { id: id.clone() },
            FilterError::MissingTable { id } => Self::MissingTable { id: id.clone() },
            other => Self::HostError {
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// Every row past the header was written.
    Applied,
    /// The pass failed before writing any row.
    Skipped(SkipReason),
    /// The pass failed after writing `shown + hidden` rows; those keep their
    /// new visibility.
    Aborted(SkipReason),
}

/// Summary of one pass.
///
/// `header_rows + shown + hidden` counts the rows the pass got through. For an
/// applied pass that is `total_rows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Lowercased query the rows were matched against.
    pub query: String,
    pub total_rows: usize,
    /// Rows skipped as header.
    pub header_rows: usize,
    pub shown: usize,
    pub hidden: usize,
    pub outcome: FilterOutcome,
}

impl FilterReport {
    fn started(query: &Query) -> Self {
        Self {
            query: query.as_str().to_string(),
            total_rows: 0,
            header_rows: 0,
            shown: 0,
            hidden: 0,
            outcome: FilterOutcome::Applied,
        }
    }

    fn skipped(err: &FilterError) -> Self {
        Self {
            outcome: FilterOutcome::Skipped(SkipReason::from(err)),
            ..Self::started(&Query::default())
        }
    }

    /// Close a pass that failed with `err`, keeping the counts written so far.
    fn stopped(mut self, err: &FilterError) -> Self {
        let reason = SkipReason::from(err);
        self.outcome = if self.rows_written() == 0 {
            FilterOutcome::Skipped(reason)
        } else {
            FilterOutcome::Aborted(reason)
        };
        self
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, FilterOutcome::Applied)
    }

    /// Rows whose visibility this pass wrote.
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.shown + self.hidden
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Filters table rows by a case-insensitive substring query.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    config: FilterConfig,
}

impl RowFilter {
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Run one pass, reading the query from `query` and the rows from `rows`.
    pub fn try_filter_rows<Q, R>(&self, query: &Q, rows: &mut R) -> Result<FilterReport>
    where
        Q: QuerySource + ?Sized,
        R: RowSource + ?Sized,
    {
        let raw = query.read_query()?;
        self.apply_query(&raw, rows)
    }

    /// Like [`RowFilter::try_filter_rows`] for a host that provides both sides.
    pub fn try_filter_page<P>(&self, page: &mut P) -> Result<FilterReport>
    where
        P: QuerySource + RowSource + ?Sized,
    {
        let raw = page.read_query()?;
        self.apply_query(&raw, page)
    }

    /// Run one pass; failures are logged and reported, never returned.
    pub fn filter_rows<Q, R>(&self, query: &Q, rows: &mut R) -> FilterReport
    where
        Q: QuerySource + ?Sized,
        R: RowSource + ?Sized,
    {
        match query.read_query() {
            Ok(raw) => self.filter_with_query(&raw, rows),
            Err(err) => Self::skipped(&err),
        }
    }

    /// Like [`RowFilter::filter_rows`] for a host that provides both sides.
    pub fn filter_page<P>(&self, page: &mut P) -> FilterReport
    where
        P: QuerySource + RowSource + ?Sized,
    {
        match page.read_query() {
            Ok(raw) => self.filter_with_query(&raw, page),
            Err(err) => Self::skipped(&err),
        }
    }

    /// Match every non-header row against `raw_query` and write its visibility.
    pub fn apply_query<R>(&self, raw_query: &str, rows: &mut R) -> Result<FilterReport>
    where
        R: RowSource + ?Sized,
    {
        let query = Query::new(raw_query);
        let mut report = FilterReport::started(&query);
        self.write_rows(&query, rows, &mut report)?;
        Ok(report)
    }

    /// Log `err` and report a pass that did not run.
    pub fn skipped(err: &FilterError) -> FilterReport {
        Self::log_failure(err, 0);
        FilterReport::skipped(err)
    }

    fn filter_with_query<R>(&self, raw_query: &str, rows: &mut R) -> FilterReport
    where
        R: RowSource + ?Sized,
    {
        let query = Query::new(raw_query);
        let mut report = FilterReport::started(&query);
        match self.write_rows(&query, rows, &mut report) {
            Ok(()) => report,
            Err(err) => {
                Self::log_failure(&err, report.rows_written());
                report.stopped(&err)
            }
        }
    }

    fn write_rows<R>(
        &self,
        query: &Query,
        rows: &mut R,
        report: &mut FilterReport,
    ) -> Result<()>
    where
        R: RowSource + ?Sized,
    {
        let handles = rows.rows()?;
        report.total_rows = handles.len();

        for (index, row) in handles.iter().enumerate() {
            if index < self.config.header_rows {
                report.header_rows += 1;
                continue;
            }
            let text = rows.row_text(row)?;
            let visibility = Visibility::from_match(query.matches(&text));
            trace!(index, ?visibility, "row");
            rows.set_visibility(row, visibility)?;
            match visibility {
                Visibility::Shown => report.shown += 1,
                Visibility::Hidden => report.hidden += 1,
            }
        }

        debug!(
            query = report.query.as_str(),
            total = report.total_rows,
            shown = report.shown,
            hidden = report.hidden,
            "filter pass applied"
        );
        Ok(())
    }

    fn log_failure(err: &FilterError, written: usize) {
        if written > 0 {
            warn!(error = %err, written, "filter pass aborted");
        } else if err.is_missing_element() {
            debug!(error = %err, "filter pass skipped");
        } else {
            warn!(error = %err, "filter pass failed");
        }
    }
}
