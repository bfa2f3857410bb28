pub mod error;
pub mod http;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use http::HttpSource;
pub use memory::InMemorySource;
pub use traits::ProductSource;
