//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the translation
//! pipeline. It includes:
//!
//! - A positioned error wrapper for rendering against the source text
//! - One error kind per pipeline phase (lexical, parse, translation)
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
