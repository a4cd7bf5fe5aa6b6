//! # Domain Module
//!
//! Core domain types for cross-chain event admission.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
