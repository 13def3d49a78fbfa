use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

use indexmap::IndexMap;

use super::{Key, Value};

/// A PHP array: an ordered map from [`Key`] to [`Value`].
///
/// `Array` is a shared handle. Cloning it yields another handle to the same
/// storage, and two handles are the same array when [`Array::ptr_eq`] holds.
/// This is what allows an array to contain itself.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<ArrayData>>);

#[derive(Debug, Default)]
pub(crate) struct ArrayData {
    pub(crate) entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl Array {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list with keys `0..n`.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let array = Self::new();
        for value in values {
            array.push(value);
        }
        array
    }

    /// Create an array from key/value pairs, in order.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let array = Self::new();
        for (key, value) in entries {
            array.insert(key, value);
        }
        array
    }

    /// Append a value under the next free integer key (`$a[] = $v`).
    pub fn push(&self, value: impl Into<Value>) {
        let mut data = self.0.borrow_mut();
        let key = data.next_index;
        data.next_index = key.saturating_add(1);
        data.entries.insert(Key::Int(key), value.into());
    }

    /// Insert or replace a value (`$a[$k] = $v`). Replacing keeps the
    /// original position.
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        if let Key::Int(i) = key {
            if i >= data.next_index {
                data.next_index = i.saturating_add(1);
            }
        }
        data.entries.insert(key, value.into());
    }

    /// Get a copy of the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.0.borrow().entries.get(key).cloned()
    }

    /// Snapshot of the keys, in order.
    pub fn keys(&self) -> Vec<Key> {
        self.0.borrow().entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Whether both handles point to the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn borrow(&self) -> Ref<'_, ArrayData> {
        self.0.borrow()
    }
}

// Arrays may be cyclic, so only the shape is printed.
impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => f.debug_struct("Array").field("len", &data.entries.len()).finish(),
            Err(_) => f.debug_struct("Array").finish_non_exhaustive(),
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_uses_next_free_index() {
        let array = Array::new();
        array.insert(5, "a");
        array.push("b");
        array.insert("x", "c");
        array.push("d");

        assert_eq!(
            array.keys(),
            vec![Key::Int(5), Key::Int(6), Key::Str("x".into()), Key::Int(7)]
        );
    }

    #[test]
    fn test_negative_keys_do_not_move_next_index() {
        let array = Array::new();
        array.insert(-5, "a");
        array.push("b");
        assert_eq!(array.keys(), vec![Key::Int(-5), Key::Int(0)]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let array = Array::from_entries([("a", 1), ("b", 2)]);
        array.insert("a", 3);

        assert_eq!(array.len(), 2);
        assert_eq!(array.keys()[0], Key::Str("a".into()));
        assert!(matches!(array.get(&Key::from("a")), Some(Value::Int(3))));
    }

    #[test]
    fn test_numeric_string_keys_are_integers() {
        let array = Array::from_entries([("1", "a")]);
        array.push("b");
        assert_eq!(array.keys(), vec![Key::Int(1), Key::Int(2)]);
    }

    #[test]
    fn test_handles_share_storage() {
        let a = Array::new();
        let b = a.clone();
        b.push(1);

        assert!(a.ptr_eq(&b));
        assert_eq!(a.len(), 1);
        assert!(!a.ptr_eq(&Array::new()));
    }

    #[test]
    fn test_self_reference_debug_does_not_recurse() {
        let a = Array::new();
        a.push(a.clone());
        assert_eq!(format!("{:?}", a), "Array { len: 1 }");
    }
}
