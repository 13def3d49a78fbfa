use std::fmt;

use super::Value;
use crate::{Dumper, Result};

/// Raw PHP code, inserted into the output without quoting.
///
/// A literal may carry arguments, in which case its text is a
/// [`Dumper::format`] template rendered lazily by the dumper that embeds it:
///
/// ```
/// use phplit_dumper::{Dumper, Literal, Value};
///
/// let dumper = Dumper::default();
/// let lit = Literal::with_args("strtoupper(?)", [Value::from("abc")]);
/// assert_eq!(lit.render_with(&dumper).unwrap(), "strtoupper('abc')");
/// ```
#[derive(Debug, Clone)]
pub struct Literal {
    code: String,
    args: Vec<Value>,
}

impl Literal {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            args: Vec::new(),
        }
    }

    /// A literal whose code is a template with `?` placeholders.
    pub fn with_args<I>(template: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            code: template.into(),
            args: args.into_iter().collect(),
        }
    }

    /// The code (or template) as given.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Produce the final code, formatting the template with `dumper` when the
    /// literal has arguments.
    pub fn render_with(&self, dumper: &Dumper) -> Result<String> {
        if self.args.is_empty() {
            Ok(self.code.clone())
        } else {
            dumper.format(&self.code, &self.args)
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
