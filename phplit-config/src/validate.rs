//! Validation of `phplit.toml` values.

use miette::SourceSpan;
use phplit_core::is_identifier;

/// Check that `name` can be emitted as a call target: a function name or
/// a static method, optionally namespaced (`\App\Hydrator::make`).
///
/// Returns a description of the problem, or `None` if the name is valid.
pub(crate) fn validate_callable(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("object factory cannot be empty".to_string());
    }

    let path = name.strip_prefix('\\').unwrap_or(name);
    let (class, method) = match path.split_once("::") {
        Some((class, method)) => (class, Some(method)),
        None => (path, None),
    };

    if let Some(segment) = class.split('\\').find(|segment| !is_identifier(segment)) {
        return Some(format!(
            "'{}' is not a valid PHP name segment in object factory '{}'",
            segment, name
        ));
    }
    match method {
        Some(method) if !is_identifier(method) => Some(format!(
            "'{}' is not a valid PHP method name in object factory '{}'",
            method, name
        )),
        _ => None,
    }
}

/// Find the span of the value assigned to `key` in the TOML source.
///
/// Looks for a line starting with `key =`; good enough for the flat
/// `[dumper]` table, and errors without a span are still reported.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let assigned = line
            .trim_start()
            .strip_prefix(key)
            .and_then(|rest| rest.trim_start().strip_prefix('='));
        if let Some(value) = assigned {
            // `value` is a suffix of `line`
            let value = value.trim_start();
            let start = offset + line.len() - value.len();
            return Some(SourceSpan::from((start, value.trim_end().len())));
        }
        offset += line.len();
    }
    None
}
