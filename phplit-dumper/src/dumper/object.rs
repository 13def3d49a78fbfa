//! Object-like values: enums, dates, serializable objects, closures and
//! generic objects rebuilt from their properties.

use std::collections::HashSet;

use super::{Ancestors, Container, Dumper, Frame, string};
use crate::{
    Error, Result,
    value::{Closure, DateTimeValue, EnumCase, Object, STD_CLASS, Serializable, Value},
};

pub(super) fn dump_enum(case: &EnumCase) -> String {
    format!("\\{}::{}", case.class, case.case)
}

pub(super) fn dump_serializable(object: &dyn Serializable) -> String {
    format!("unserialize({})", string::dump_string(&object.serialize()))
}

pub(super) fn dump_closure(closure: &Closure) -> Result<String> {
    match closure {
        Closure::Function(name) => Ok(format!("{}(...)", name)),
        Closure::StaticMethod { class, method } => Ok(format!("{}::{}(...)", class, method)),
        Closure::Capturing => Err(Error::unsupported("closure")),
    }
}

impl Dumper {
    pub(super) fn dump_datetime(&self, value: &DateTimeValue) -> Result<String> {
        let template = format!("new \\{}(?, new \\DateTimeZone(?))", value.class.as_str());
        self.format(
            &template,
            &[
                Value::from(value.formatted()),
                Value::from(value.timezone.as_str()),
            ],
        )
    }

    pub(super) fn dump_object(
        &self,
        object: &Object,
        parents: &mut Ancestors,
        frame: Frame,
    ) -> Result<String> {
        let data = object.borrow();
        if data.anonymous {
            return Err(Error::unsupported("anonymous class"));
        }

        let container = Container::Object(object.clone());
        self.guard(&container, parents, frame)?;

        let persisted: Option<HashSet<String>> = data.persisted.as_ref().map(|names| {
            names
                .iter()
                .flat_map(|name| {
                    [
                        name.clone(),
                        format!("\0*\0{}", name),
                        format!("\0{}\0{}", data.class, name),
                    ]
                })
                .collect()
        });

        let unit = self.config.indentation.as_str();
        let space = self.config.indentation.repeat(frame.level);

        let body = parents.within(container, |parents| {
            let mut out = String::from("\n");
            for property in &data.properties {
                let key = property.mangled_name(&data.class);
                if persisted.as_ref().is_some_and(|names| !names.contains(&key)) {
                    continue;
                }
                let key_part = format!("{} => ", string::dump_string(key.as_bytes()));
                let child = frame.wrapped_child(key_part.len());
                out.push_str(&space);
                out.push_str(unit);
                out.push_str(&key_part);
                out.push_str(&self.dump_var(&property.value, parents, child)?);
                out.push_str(",\n");
            }
            out.push_str(&space);
            Ok(out)
        })?;

        if data.class == STD_CLASS {
            Ok(format!("(object) [{}]", body))
        } else {
            Ok(format!(
                "{}('{}', [{}])",
                self.config.object_factory, data.class, body
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Blob(&'static [u8]);

    impl Serializable for Blob {
        fn serialize(&self) -> Vec<u8> {
            self.0.to_vec()
        }
    }

    #[test]
    fn test_enum() {
        assert_eq!(dump_enum(&EnumCase::new("App\\Suit", "Hearts")), "\\App\\Suit::Hearts");
    }

    #[test]
    fn test_serializable() {
        assert_eq!(
            dump_serializable(&Blob(b"O:3:\"Foo\":0:{}")),
            "unserialize('O:3:\"Foo\":0:{}')"
        );
        assert_eq!(
            dump_serializable(&Blob(b"s:1:\"\0\";")),
            r#"unserialize("s:1:\"\x00\";")"#
        );
    }

    #[test]
    fn test_closures() {
        assert_eq!(dump_closure(&Closure::function("strlen")).unwrap(), "strlen(...)");
        assert_eq!(
            dump_closure(&Closure::static_method("App\\Util", "trim")).unwrap(),
            "App\\Util::trim(...)"
        );
        assert!(matches!(
            dump_closure(&Closure::Capturing),
            Err(Error::UnsupportedValue { .. })
        ));
    }
}
