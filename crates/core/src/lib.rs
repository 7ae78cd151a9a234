//! Sign-up form validation.
//!
//! Pure logic with no I/O: field identifiers, per-field rules, document
//! check digits, display masks and the registration pipeline that ties
//! them together.

pub mod documents;
pub mod error;
pub mod field;
pub mod masks;
pub mod registration;
pub mod rules;
