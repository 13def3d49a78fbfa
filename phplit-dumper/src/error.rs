use miette::Diagnostic;
use thiserror::Error;

/// Result type for dumper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while dumping or formatting.
///
/// All of these describe a programming error in the value handed to the
/// dumper; none are transient.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot dump {what}")]
    #[diagnostic(
        code(phplit::unsupported_value),
        help("resources, capturing closures and anonymous classes have no PHP literal form")
    )]
    UnsupportedValue { what: String },

    #[error("nesting level too deep or recursive dependency")]
    #[diagnostic(
        code(phplit::recursion),
        help("break the reference cycle or raise `max_depth`")
    )]
    Recursion,

    #[error("argument for placeholder '{placeholder}' must be an array, got {found}")]
    #[diagnostic(code(phplit::invalid_argument))]
    InvalidArgument {
        placeholder: &'static str,
        found: &'static str,
    },

    #[error("insufficient number of arguments")]
    #[diagnostic(
        code(phplit::insufficient_arguments),
        help("every placeholder except '\\?' consumes one argument")
    )]
    InsufficientArguments,

    #[error("insufficient number of placeholders")]
    #[diagnostic(code(phplit::too_many_arguments))]
    TooManyArguments { unused: usize },
}

impl Error {
    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        let what = what.into();
        tracing::debug!(%what, "rejecting unsupported value");
        Self::UnsupportedValue { what }
    }
}
