pub mod browse;
pub mod categories;
pub mod show;
