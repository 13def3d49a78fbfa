//! The value-to-PHP dumper.
//!
//! [`Dumper::dump`] dispatches on the shape of a [`Value`] and recurses into
//! arrays and objects, choosing per container between an inline and a
//! wrapped layout. [`Dumper::format`] splices dumped values into a statement
//! template.

mod array;
mod format;
mod object;
mod scalar;
mod string;

use phplit_core::Indent;

use crate::{
    Error, Result,
    value::{Array, Literal, Object, Value},
};

/// Factory the generated code calls to rebuild generic objects.
pub const DEFAULT_OBJECT_FACTORY: &str = "\\Nette\\PhpGenerator\\Dumper::createObject";

/// Dumper configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumperConfig {
    /// Deepest container nesting allowed (the root is depth 0).
    pub max_depth: usize,
    /// Line width the wrap decision budgets against.
    pub wrap_length: usize,
    /// Indentation unit for wrapped output.
    pub indentation: Indent,
    /// Callable emitted as `factory('Class', [...])` for generic objects.
    pub object_factory: String,
}

impl Default for DumperConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            wrap_length: 120,
            indentation: Indent::Tab,
            object_factory: DEFAULT_OBJECT_FACTORY.to_string(),
        }
    }
}

impl DumperConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_wrap_length(mut self, wrap_length: usize) -> Self {
        self.wrap_length = wrap_length;
        self
    }

    pub fn with_indentation(mut self, indentation: Indent) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn with_object_factory(mut self, factory: impl Into<String>) -> Self {
        self.object_factory = factory.into();
        self
    }
}

/// Renders values as PHP expressions.
///
/// # Example
///
/// ```
/// use phplit_dumper::{Dumper, Value};
///
/// let dumper = Dumper::default();
/// let value = Value::map([("name", Value::from("Jim")), ("age", Value::from(42))]);
/// assert_eq!(dumper.dump(&value, 0).unwrap(), "['name' => 'Jim', 'age' => 42]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dumper {
    config: DumperConfig,
}

/// Where a value is being rendered.
///
/// `level` drives indentation and the wrap budget and is reset to 0 for
/// values laid out inline, while `depth` always counts real nesting and is
/// what the depth guard checks.
#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    level: usize,
    depth: usize,
    column: usize,
}

impl Frame {
    fn root(column: usize) -> Self {
        Self {
            column,
            ..Self::default()
        }
    }

    /// A template argument, laid out inline at `depth`.
    fn argument(depth: usize, column: usize) -> Self {
        Self {
            level: 0,
            depth,
            column,
        }
    }

    /// Child laid out on the parent's line.
    fn inline_child(&self, column: usize) -> Self {
        Self {
            level: 0,
            depth: self.depth + 1,
            column,
        }
    }

    /// Child starting on its own line, one indent level deeper.
    fn wrapped_child(&self, column: usize) -> Self {
        Self {
            level: self.level + 1,
            depth: self.depth + 1,
            column,
        }
    }
}

/// A container currently being rendered.
#[derive(Clone)]
enum Container {
    Array(Array),
    Object(Object),
}

impl Container {
    fn is(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a.ptr_eq(b),
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// The chain of containers enclosing the value being rendered.
#[derive(Default)]
struct Ancestors(Vec<Container>);

impl Ancestors {
    fn contains(&self, container: &Container) -> bool {
        self.0.iter().any(|c| c.is(container))
    }

    /// Run `f` with `container` pushed; it is popped again on every path.
    fn within<T>(
        &mut self,
        container: Container,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.0.push(container);
        let result = f(self);
        self.0.pop();
        result
    }
}

impl Dumper {
    pub fn new(config: DumperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DumperConfig {
        &self.config
    }

    /// Render `value` as a PHP expression.
    ///
    /// `column` is how many characters precede the value on its line; it
    /// only affects the wrap decision of the outermost container.
    #[tracing::instrument(level = "trace", skip(self, value), fields(kind = value.kind()))]
    pub fn dump(&self, value: &Value, column: usize) -> Result<String> {
        self.dump_var(value, &mut Ancestors::default(), Frame::root(column))
    }

    fn dump_var(&self, value: &Value, parents: &mut Ancestors, frame: Frame) -> Result<String> {
        match value {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(scalar::dump_int(*i)),
            Value::Float(f) => Ok(scalar::dump_float(*f)),
            Value::String(s) => Ok(string::dump_string(s.as_bytes())),
            Value::Array(array) => self.dump_array(array, parents, frame),
            Value::Literal(literal) => self.dump_literal(literal, parents, frame),
            Value::Enum(case) => Ok(object::dump_enum(case)),
            Value::DateTime(dt) => self.dump_datetime(dt),
            Value::Serializable(obj) => Ok(object::dump_serializable(obj.as_ref())),
            Value::Closure(closure) => object::dump_closure(closure),
            Value::Object(obj) => self.dump_object(obj, parents, frame),
            Value::Resource(res) => Err(Error::unsupported(format!("resource ({})", res.kind))),
        }
    }

    /// Fail when `container` is nested too deep or already being rendered.
    fn guard(&self, container: &Container, parents: &Ancestors, frame: Frame) -> Result<()> {
        if frame.depth > self.config.max_depth || parents.contains(container) {
            tracing::debug!(depth = frame.depth, "rejecting recursive or too deep value");
            return Err(Error::Recursion);
        }
        Ok(())
    }

    /// Template arguments of a literal count as its children, so cycles and
    /// the depth limit are checked across the literal.
    fn dump_literal(
        &self,
        literal: &Literal,
        parents: &mut Ancestors,
        frame: Frame,
    ) -> Result<String> {
        let unit = self.config.indentation.as_str();
        let code = if literal.args().is_empty() {
            literal.code().to_string()
        } else {
            self.format_within(literal.code(), literal.args(), parents, frame.depth + 1)?
        };
        let indented = phplit_core::indent_lines(code.trim(), frame.level, unit);
        Ok(indented
            .trim_start_matches(|c: char| unit.contains(c))
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        let d = Dumper::default();
        assert_eq!(d.dump(&Value::Null, 0).unwrap(), "null");
        assert_eq!(d.dump(&Value::Bool(true), 0).unwrap(), "true");
        assert_eq!(d.dump(&Value::Bool(false), 0).unwrap(), "false");
        assert_eq!(d.dump(&Value::Int(-12), 0).unwrap(), "-12");
        assert_eq!(d.dump(&Value::Float(0.5), 0).unwrap(), "0.5");
    }

    #[test]
    fn test_literal_is_verbatim() {
        let d = Dumper::default();
        assert_eq!(d.dump(&Value::literal("  PHP_EOL \n"), 0).unwrap(), "PHP_EOL");
    }

    #[test]
    fn test_literal_reindented_inside_wrapped_array() {
        let d = Dumper::new(DumperConfig::default().with_wrap_length(10));
        let value = Value::list([Value::literal("foo(\n\t1,\n)"), Value::from("abcdef")]);

        assert_eq!(
            d.dump(&value, 0).unwrap(),
            "[\n\tfoo(\n\t\t1,\n\t),\n\t'abcdef',\n]"
        );
    }

    #[test]
    fn test_literal_with_args() {
        let d = Dumper::default();
        let lit = Literal::with_args("new Foo(?)", [Value::from("x")]);
        assert_eq!(d.dump(&Value::Literal(lit), 0).unwrap(), "new Foo('x')");
    }

    #[test]
    fn test_literal_args_continue_ancestor_chain() {
        let array = Array::new();
        array.push(Literal::with_args("f(...?)", [Value::Array(array.clone())]));

        let err = Dumper::default().dump(&Value::Array(array), 0).unwrap_err();
        assert!(matches!(err, Error::Recursion));
    }

    #[test]
    fn test_resource_rejected() {
        let d = Dumper::default();
        let err = d
            .dump(&Value::Resource(crate::value::Resource::new("stream")), 0)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue { .. }));
    }

    #[test]
    fn test_config_builders() {
        let config = DumperConfig::default()
            .with_max_depth(3)
            .with_wrap_length(80)
            .with_indentation(Indent::Spaces(2))
            .with_object_factory("make");

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.wrap_length, 80);
        assert_eq!(config.indentation, Indent::Spaces(2));
        assert_eq!(config.object_factory, "make");
        assert_eq!(Dumper::new(config.clone()).config(), &config);
    }
}
