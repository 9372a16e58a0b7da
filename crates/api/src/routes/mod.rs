//! HTTP Routes

pub mod page;
pub mod summary;
pub mod visualizations;
