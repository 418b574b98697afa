//! Carousel that shows one photo at a time with a fade-in, in order,
//! starting over after the last one.

pub mod engine;
pub mod state;
