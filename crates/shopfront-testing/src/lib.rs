//! Testing infrastructure for shopfront integration tests.
//!
//! - `fixtures`: sample catalogs, including the two-product scenario pair
//! - `scripted`: a `ProductSource` with programmable failures and latencies
//!   for exercising error phases and stale-fetch suppression

pub mod fixtures;
pub mod scripted;

pub use scripted::ScriptedSource;
