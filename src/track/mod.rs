//! Continuous horizontal carousel that loops seamlessly over a doubled
//! virtual sequence of photos.

pub mod engine;
pub mod layout;
pub mod slide;
pub mod state;
