//! Pure derivation of visible product lists.
//!
//! Everything here is a synchronous function of its inputs: no I/O, no
//! suspension, no shared state. Controllers re-run `apply` whenever any
//! criteria input changes.

pub mod filter;
pub mod summary;

pub use filter::apply;
pub use summary::{CatalogSummary, summarize};
