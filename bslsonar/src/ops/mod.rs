//! Core operations.
//!
//! This module contains the business logic for bslsonar,
//! separated from CLI argument parsing and output rendering.

pub mod find;

pub use find::find;
