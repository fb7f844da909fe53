#![forbid(unsafe_code)]

//! Browser frontend for `rowfilter-core`.
//!
//! Implements the core's host traits on the live DOM ([`DomPage`]) and exports
//! the JS surface through `wasm-bindgen`:
//!
//! - `filterBooks()`: filter `#bookTable` rows by the `#search` box. Bind it to
//!   the box's `input` event, e.g. `<input id="search" oninput="filterBooks()">`.
//! - `TableFilter`: same pass with configurable element ids, a JSON report, and
//!   `attach()` to wire the event listener from Rust.
//!
//! Everything here is only compiled on `wasm32`; native builds get an empty
//! library and exercise the filter through `rowfilter-core` directly.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;
#[cfg(target_arch = "wasm32")]
pub use wasm::{TableFilter, filter_books};
