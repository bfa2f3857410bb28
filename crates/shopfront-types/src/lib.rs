pub mod catalog;
pub mod criteria;

pub use catalog::*;
pub use criteria::*;
