#![forbid(unsafe_code)]

//! `rowfilter-core` hides table rows that do not contain the search text.
//!
//! The page (or any other host) is reached only through two small traits:
//! - [`QuerySource`]: the current value of the search box.
//! - [`RowSource`]: the table's rows in document order, their text, and a way
//!   to show or hide each one.
//!
//! [`RowFilter`] runs one synchronous pass over those: the first row is the
//! header and is left alone, every other row is shown iff its lowercased text
//! contains the lowercased query. `rowfilter-web` implements the traits on the
//! live DOM; [`MemoryPage`] implements them in memory.
//!
//! # Example
//! ```
//! use rowfilter_core::{MemoryPage, RowFilter};
//!
//! let mut page = MemoryPage::with_rows([
//!     "Header",
//!     "The Go Programming Language",
//!     "Clean Code",
//!     "Refactoring",
//! ]);
//! page.set_query("code");
//!
//! let report = RowFilter::default().filter_page(&mut page);
//! assert!(report.is_applied());
//! assert_eq!(page.visible_texts(), ["Header", "Clean Code"]);
//! ```

pub mod error;
pub mod filter;
pub mod matcher;
pub mod memory;
pub mod source;

pub use error::{FilterError, Result};
pub use filter::{FilterConfig, FilterOutcome, FilterReport, RowFilter, SkipReason};
pub use matcher::{Query, row_matches};
pub use memory::{MemoryPage, MemoryRow};
pub use source::{QuerySource, RowSource, Visibility};
