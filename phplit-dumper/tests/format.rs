//! End-to-end tests for `Dumper::format`.

use phplit_dumper::{Array, Dumper, DumperConfig, Error, Object, Value};
use pretty_assertions::assert_eq;

fn format(template: &str, args: &[Value]) -> String {
    Dumper::default()
        .format(template, args)
        .expect("template should format")
}

#[test]
fn test_positional_values() {
    insta::assert_snapshot!(
        format("foo(?, ?)", &[Value::from(1), Value::from("x")]),
        @"foo(1, 'x')"
    );
}

#[test]
fn test_template_without_placeholders() {
    assert_eq!(format("return;", &[]), "return;");
}

#[test]
fn test_escaped_placeholder_consumes_nothing() {
    assert_eq!(format("a \\? b ?", &[Value::from(1)]), "a ? b 1");
}

#[test]
fn test_member_placeholders_splice_identifiers() {
    assert_eq!(format("$?", &[Value::from("var")]), "$var");
    assert_eq!(format("$obj->?", &[Value::from("name")]), "$obj->name");
    assert_eq!(format("Foo::?", &[Value::from("BAR")]), "Foo::BAR");
}

#[test]
fn test_member_placeholders_brace_everything_else() {
    assert_eq!(
        format("$obj->?", &[Value::from("my-prop")]),
        "$obj->{'my-prop'}"
    );
    assert_eq!(format("$obj->?()", &[Value::literal("$method")]), "$obj->{$method}()");
    assert_eq!(format("$?", &[Value::from(1)]), "${1}");

    let object = Object::std().with("a", 1);
    assert_eq!(
        format("$x->?->bar()", &[object.into()]),
        "$x->{(object) [\n\t'a' => 1,\n]}->bar()"
    );
}

#[test]
fn test_spread_arguments() {
    assert_eq!(format("f(...?)", &[Value::list([1, 2])]), "f(1, 2)");
    assert_eq!(format("f(?*)", &[Value::list([1, 2])]), "f(1, 2)");
    assert_eq!(format("f(...?)", &[Value::list(Vec::<Value>::new())]), "f()");
}

#[test]
fn test_named_arguments() {
    let args = Value::map([("a", 1), ("b", 2)]);
    assert_eq!(format("f(...?:)", &[args]), "f(a: 1, b: 2)");

    let mixed = Array::new();
    mixed.push("x");
    mixed.insert("b", 2);
    assert_eq!(format("f(...?:)", &[mixed.into()]), "f('x', b: 2)");
}

#[test]
fn test_positional_spread_ignores_string_keys() {
    let args = Value::map([("a", 1), ("b", 2)]);
    assert_eq!(format("f(...?)", &[args]), "f(1, 2)");
}

#[test]
fn test_long_argument_lists_wrap() {
    let dumper = Dumper::new(DumperConfig::default().with_wrap_length(20));
    let args = Value::list(["aaaaaaaa", "bbbbbbbb"]);

    assert_eq!(
        dumper.format("f(...?)", &[args]).unwrap(),
        "f(\n\t'aaaaaaaa',\n\t'bbbbbbbb',\n)"
    );
}

#[test]
fn test_single_argument_never_wraps() {
    let dumper = Dumper::new(DumperConfig::default().with_wrap_length(10));
    let args = Value::list(["a long single argument"]);

    assert_eq!(
        dumper.format("f(...?)", &[args]).unwrap(),
        "f('a long single argument')"
    );
}

#[test]
fn test_value_placeholder_passes_column() {
    let dumper = Dumper::new(DumperConfig::default().with_wrap_length(20));
    let value = Value::list(["abcdefgh", "ijkl"]);

    assert_eq!(
        dumper.format("$x = ?;", &[value]).unwrap(),
        "$x = [\n\t'abcdefgh',\n\t'ijkl',\n];"
    );
}

#[test]
fn test_column_resets_after_newline() {
    let dumper = Dumper::new(DumperConfig::default().with_wrap_length(30));
    let value = Value::list(["abcdefgh", "ijkl"]);
    let template = format!("// {}\n$x = ?;", "-".repeat(40));

    assert_eq!(
        dumper.format(&template, &[value]).unwrap(),
        format!("// {}\n$x = ['abcdefgh', 'ijkl'];", "-".repeat(40))
    );
}

#[test]
fn test_insufficient_arguments() {
    let err = Dumper::default()
        .format("foo(?, ?)", &[Value::from(1)])
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientArguments));
}

#[test]
fn test_too_many_arguments() {
    let err = Dumper::default()
        .format("foo(?)", &[Value::from(1), Value::from(2), Value::from(3)])
        .unwrap_err();
    assert!(matches!(err, Error::TooManyArguments { unused: 2 }));
}

#[test]
fn test_spread_requires_array() {
    let err = Dumper::default()
        .format("f(...?)", &[Value::from(1)])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            placeholder: "...?",
            found: "int"
        }
    ));
    assert_eq!(
        err.to_string(),
        "argument for placeholder '...?' must be an array, got int"
    );
}

#[test]
fn test_cyclic_argument_list_rejected() {
    let args = Array::new();
    args.push(args.clone());

    let err = Dumper::default()
        .format("f(...?)", &[args.into()])
        .unwrap_err();
    assert!(matches!(err, Error::Recursion));
}
