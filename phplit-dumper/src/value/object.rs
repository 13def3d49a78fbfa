use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

use super::Value;

/// Class of PHP's anonymous plain objects.
pub const STD_CLASS: &str = "stdClass";

/// Visibility of an object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A single object property.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub visibility: Visibility,
    pub value: Value,
}

impl Property {
    /// The property name as it appears in PHP's array cast of the object:
    /// `name`, `"\0*\0name"` or `"\0Class\0name"`.
    pub fn mangled_name(&self, class: &str) -> String {
        match self.visibility {
            Visibility::Public => self.name.clone(),
            Visibility::Protected => format!("\0*\0{}", self.name),
            Visibility::Private => format!("\0{}\0{}", class, self.name),
        }
    }
}

/// An object reconstructed from its class name and properties.
///
/// This is the dynamic-object path: the generated code hands the properties
/// to a factory (`createObject`) which rebuilds the instance through
/// reflection. `Object` is a shared handle like [`super::Array`].
#[derive(Clone)]
pub struct Object(Rc<RefCell<ObjectData>>);

#[derive(Debug)]
pub(crate) struct ObjectData {
    pub(crate) class: String,
    pub(crate) anonymous: bool,
    pub(crate) properties: Vec<Property>,
    pub(crate) persisted: Option<Vec<String>>,
}

impl Object {
    /// Create an object of the given class. A leading `\` is ignored.
    pub fn new(class: impl Into<String>) -> Self {
        let class = class.into().trim_start_matches('\\').to_string();
        Self(Rc::new(RefCell::new(ObjectData {
            class,
            anonymous: false,
            properties: Vec::new(),
            persisted: None,
        })))
    }

    /// Create a plain `stdClass` object.
    pub fn std() -> Self {
        Self::new(STD_CLASS)
    }

    /// Create an instance of an anonymous class. These cannot be dumped.
    pub fn anonymous() -> Self {
        let object = Self::new("class@anonymous");
        object.0.borrow_mut().anonymous = true;
        object
    }

    /// Set a public property.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.set_with_visibility(name, Visibility::Public, value);
    }

    /// Set a property with explicit visibility, replacing an existing one
    /// with the same name and visibility.
    pub fn set_with_visibility(
        &self,
        name: impl Into<String>,
        visibility: Visibility,
        value: impl Into<Value>,
    ) {
        let name = name.into();
        let value = value.into();
        let mut data = self.0.borrow_mut();
        match data
            .properties
            .iter_mut()
            .find(|p| p.name == name && p.visibility == visibility)
        {
            Some(existing) => existing.value = value,
            None => data.properties.push(Property {
                name,
                visibility,
                value,
            }),
        }
    }

    /// Restrict the dumped properties to `names` (PHP's `__sleep()`).
    pub fn persist_only<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.borrow_mut().persisted = Some(names.into_iter().map(Into::into).collect());
    }

    /// Builder-style [`Object::set`].
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn class(&self) -> String {
        self.0.borrow().class.clone()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.borrow().anonymous
    }

    /// Whether both handles point to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn borrow(&self) -> Ref<'_, ObjectData> {
        self.0.borrow()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => f
                .debug_struct("Object")
                .field("class", &data.class)
                .field("properties", &data.properties.len())
                .finish(),
            Err(_) => f.debug_struct("Object").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mangled_names() {
        let prop = |visibility| Property {
            name: "id".into(),
            visibility,
            value: Value::Null,
        };

        assert_eq!(prop(Visibility::Public).mangled_name("App\\User"), "id");
        assert_eq!(prop(Visibility::Protected).mangled_name("App\\User"), "\0*\0id");
        assert_eq!(
            prop(Visibility::Private).mangled_name("App\\User"),
            "\0App\\User\0id"
        );
    }

    #[test]
    fn test_leading_backslash_stripped() {
        assert_eq!(Object::new("\\App\\User").class(), "App\\User");
        assert_eq!(Object::std().class(), STD_CLASS);
    }

    #[test]
    fn test_set_replaces_same_visibility_only() {
        let object = Object::new("Foo");
        object.set("a", 1);
        object.set_with_visibility("a", Visibility::Private, 2);
        object.set("a", 3);

        let data = object.borrow();
        assert_eq!(data.properties.len(), 2);
        assert!(matches!(data.properties[0].value, Value::Int(3)));
    }

    #[test]
    fn test_anonymous() {
        assert!(Object::anonymous().is_anonymous());
        assert!(!Object::new("Foo").is_anonymous());
    }
}
