//! Storefront runtime: view-controller state machines over a product source.
//!
//! Each controller is a three-phase machine (Loading → Error | Ready) that
//! owns its state exclusively behind a mutex. Fetches suspend only at the
//! data-source boundary; a superseded fetch's result is disregarded via a
//! monotonically increasing load epoch.

pub mod config;
pub mod detail;
pub mod error;
pub mod list;
pub mod storefront;

pub use config::{Config, resolve_api_url};
pub use detail::{DetailController, DetailPhase, ProductView};
pub use error::{Error, Result};
pub use list::{CatalogView, ListController, ListPhase};
pub use storefront::Storefront;
