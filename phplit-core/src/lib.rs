//! Core utilities and types for phplit.
//!
//! This crate provides the small helpers the dumper relies
//! on: the PHP identifier predicate, line indentation and the indentation
//! unit.

mod indent;
mod utils;

pub use indent::Indent;
// String utilities
pub use utils::{indent_lines, is_identifier};
