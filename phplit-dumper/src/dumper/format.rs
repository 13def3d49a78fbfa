//! Statement templates: `?` placeholders replaced by dumped arguments.

use phplit_core::is_identifier;

use super::{Ancestors, Container, Dumper, Frame};
use crate::{
    Error, Result,
    value::{Array, Key, Value},
};

/// A placeholder in a statement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    /// `?`
    Value,
    /// `\?`
    Escaped,
    /// `$?`, `->?` and `::?`; holds the connective.
    Member(&'static str),
    /// `...?` and `?*`
    Arguments(&'static str),
    /// `...?:`
    NamedArguments,
}

impl Placeholder {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "?",
            Self::Escaped => "\\?",
            Self::Member("$") => "$?",
            Self::Member("->") => "->?",
            Self::Member(_) => "::?",
            Self::Arguments(token) => *token,
            Self::NamedArguments => "...?:",
        }
    }
}

/// Placeholder syntax, tried in order at every position.
const PLACEHOLDERS: &[(&str, Placeholder)] = &[
    ("...?:", Placeholder::NamedArguments),
    ("...?", Placeholder::Arguments("...?")),
    ("$?", Placeholder::Member("$")),
    ("->?", Placeholder::Member("->")),
    ("::?", Placeholder::Member("::")),
    ("\\?", Placeholder::Escaped),
    ("?*", Placeholder::Arguments("?*")),
    ("?", Placeholder::Value),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Placeholder(Placeholder),
}

/// Split a template into literal text and placeholders.
fn tokenize(template: &str) -> Vec<Token<'_>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let found = PLACEHOLDERS
            .iter()
            .find(|(syntax, _)| bytes[pos..].starts_with(syntax.as_bytes()));

        match found {
            Some((syntax, placeholder)) => {
                if text_start < pos {
                    tokens.push(Token::Text(&template[text_start..pos]));
                }
                tokens.push(Token::Placeholder(*placeholder));
                pos += syntax.len();
                text_start = pos;
            }
            None => pos += 1,
        }
    }

    if text_start < bytes.len() {
        tokens.push(Token::Text(&template[text_start..]));
    }
    tokens
}

/// Column the next character would be written at.
fn current_column(out: &str) -> usize {
    match out.rfind('\n') {
        Some(newline) => out.len() - newline,
        None => out.len(),
    }
}

impl Dumper {
    /// Render a PHP statement from a template.
    ///
    /// | Placeholder | Replaced by |
    /// |---|---|
    /// | `?` | the dumped argument |
    /// | `\?` | a literal `?` (consumes nothing) |
    /// | `$?`, `->?`, `::?` | the argument as a bare name, or `{dumped}` if it is not an identifier |
    /// | `...?`, `?*` | an array argument as a call argument list |
    /// | `...?:` | same, with string keys as named arguments |
    ///
    /// ```
    /// use phplit_dumper::{Dumper, Value};
    ///
    /// let dumper = Dumper::default();
    /// let code = dumper.format("$obj->?(...?)", &[
    ///     Value::from("call"),
    ///     Value::list([1, 2]),
    /// ]).unwrap();
    /// assert_eq!(code, "$obj->call(1, 2)");
    /// ```
    #[tracing::instrument(level = "trace", skip(self, args), fields(args = args.len()))]
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String> {
        self.format_within(template, args, &mut Ancestors::default(), 0)
    }

    /// Render a template whose arguments sit at `depth` inside the
    /// containers in `parents`.
    pub(super) fn format_within(
        &self,
        template: &str,
        args: &[Value],
        parents: &mut Ancestors,
        depth: usize,
    ) -> Result<String> {
        let mut args = args.iter();
        let mut next_arg = || args.next().ok_or(Error::InsufficientArguments);
        let mut out = String::new();

        for token in tokenize(template) {
            let placeholder = match token {
                Token::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Token::Placeholder(placeholder) => placeholder,
            };

            match placeholder {
                Placeholder::Escaped => out.push('?'),
                Placeholder::Value => {
                    let arg = next_arg()?;
                    let frame = Frame::argument(depth, current_column(&out));
                    out.push_str(&self.dump_var(arg, parents, frame)?);
                }
                Placeholder::Arguments(_) | Placeholder::NamedArguments => {
                    let arg = next_arg()?;
                    let Value::Array(array) = arg else {
                        return Err(Error::InvalidArgument {
                            placeholder: placeholder.as_str(),
                            found: arg.kind(),
                        });
                    };
                    let frame = Frame::argument(depth, current_column(&out));
                    let named = placeholder == Placeholder::NamedArguments;
                    out.push_str(&self.dump_arguments(array, parents, frame, named)?);
                }
                Placeholder::Member(connective) => {
                    let arg = next_arg()?;
                    let identifier = match arg {
                        Value::String(name) => name.as_str().filter(|name| is_identifier(name)),
                        _ => None,
                    };
                    out.push_str(connective);
                    match identifier {
                        Some(name) => out.push_str(name),
                        None => {
                            out.push('{');
                            let frame = Frame::argument(depth, 0);
                            out.push_str(&self.dump_var(arg, parents, frame)?);
                            out.push('}');
                        }
                    }
                }
            }
        }

        let unused = args.len();
        if unused > 0 {
            return Err(Error::TooManyArguments { unused });
        }
        Ok(out)
    }

    /// Render an array as a call argument list.
    fn dump_arguments(
        &self,
        array: &Array,
        parents: &mut Ancestors,
        frame: Frame,
        named: bool,
    ) -> Result<String> {
        let data = array.borrow();
        let container = Container::Array(array.clone());
        self.guard(&container, parents, frame)?;

        let labels: Vec<String> = data
            .entries
            .keys()
            .map(|key| match key {
                Key::Str(name) if named => format!("{}: ", name),
                _ => String::new(),
            })
            .collect();

        parents.within(container, |parents| {
            let mut inline = String::new();
            for (label, value) in labels.iter().zip(data.entries.values()) {
                if !inline.is_empty() {
                    inline.push_str(", ");
                }
                let child = frame.inline_child(frame.column + inline.len());
                inline.push_str(label);
                inline.push_str(&self.dump_var(value, parents, child)?);
            }

            let too_wide =
                inline.contains('\n') || frame.column + inline.len() > self.config.wrap_length;
            if data.entries.len() <= 1 || !too_wide {
                return Ok(inline);
            }

            let unit = self.config.indentation.as_str();
            let mut wrapped = String::new();
            for (label, value) in labels.iter().zip(data.entries.values()) {
                wrapped.push('\n');
                wrapped.push_str(unit);
                wrapped.push_str(label);
                wrapped.push_str(&self.dump_var(value, parents, frame.wrapped_child(0))?);
                wrapped.push(',');
            }
            wrapped.push('\n');
            Ok(wrapped)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_text_only() {
        assert_eq!(tokenize("foo()"), vec![Token::Text("foo()")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_placeholders() {
        assert_eq!(
            tokenize("a(?, ...?)->?::?$?"),
            vec![
                Token::Text("a("),
                Token::Placeholder(Placeholder::Value),
                Token::Text(", "),
                Token::Placeholder(Placeholder::Arguments("...?")),
                Token::Text(")"),
                Token::Placeholder(Placeholder::Member("->")),
                Token::Placeholder(Placeholder::Member("::")),
                Token::Placeholder(Placeholder::Member("$")),
            ]
        );
    }

    #[test]
    fn test_tokenize_longest_forms_win() {
        assert_eq!(
            tokenize("f(...?:)"),
            vec![
                Token::Text("f("),
                Token::Placeholder(Placeholder::NamedArguments),
                Token::Text(")"),
            ]
        );
        assert_eq!(
            tokenize("?*\\?"),
            vec![
                Token::Placeholder(Placeholder::Arguments("?*")),
                Token::Placeholder(Placeholder::Escaped),
            ]
        );
    }

    #[test]
    fn test_tokenize_multibyte_text() {
        assert_eq!(
            tokenize("č?ř"),
            vec![
                Token::Text("č"),
                Token::Placeholder(Placeholder::Value),
                Token::Text("ř"),
            ]
        );
    }

    #[test]
    fn test_current_column() {
        assert_eq!(current_column(""), 0);
        assert_eq!(current_column("abc"), 3);
        assert_eq!(current_column("abc\nde"), 3);
    }

    #[test]
    fn test_placeholder_names() {
        assert_eq!(Placeholder::Member("$").as_str(), "$?");
        assert_eq!(Placeholder::Member("->").as_str(), "->?");
        assert_eq!(Placeholder::Member("::").as_str(), "::?");
        assert_eq!(Placeholder::Arguments("?*").as_str(), "?*");
        assert_eq!(Placeholder::NamedArguments.as_str(), "...?:");
    }
}
