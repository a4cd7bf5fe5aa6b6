//! # Algorithms Module
//!
//! Pure functions over the admission domain.

pub mod sequence;

pub use sequence::calculate_sequence;
