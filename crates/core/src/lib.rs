//! Shared domain types, errors, and input validation for the question
//! data layer.

pub mod error;
pub mod types;
pub mod validation;

pub use error::CoreError;
