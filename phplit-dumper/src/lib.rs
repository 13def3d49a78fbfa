//! Render values as PHP literal expressions.
//!
//! The [`Dumper`] turns a [`Value`] into PHP source that evaluates back to an
//! equivalent value, wrapping nested arrays across lines when they would not
//! fit the configured width. [`Dumper::format`] splices dumped values into
//! larger statements.
//!
//! # Module Organization
//!
//! - [`value`] - The value model (`Value`, `Array`, `Object`, ...)
//! - [`dumper`] - Rendering and statement formatting
//! - [`convert`] - Conversions from JSON and TOML documents
//!
//! # Example
//!
//! ```
//! use phplit_dumper::{Dumper, Value};
//!
//! let dumper = Dumper::default();
//! let code = dumper
//!     .format("$config = ?;", &[Value::map([("debug", true)])])
//!     .unwrap();
//! assert_eq!(code, "$config = ['debug' => true];");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod convert;
pub mod dumper;
mod error;
pub mod value;

pub use dumper::{DEFAULT_OBJECT_FACTORY, Dumper, DumperConfig};
pub use error::{Error, Result};
pub use phplit_core::Indent;
pub use value::{
    Array, Closure, DateTimeClass, DateTimeValue, EnumCase, Key, Literal, Object, PhpString,
    Property, Resource, Serializable, Value, Visibility,
};
