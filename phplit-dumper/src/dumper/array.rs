//! Array rendering: key elision and the inline/wrapped layout decision.

use super::{Ancestors, Container, Dumper, Frame, string};
use crate::{
    Result,
    value::{Array, Key},
};

/// Room for the brackets and the separator that follows the array.
const BRACKETS_AND_SEPARATOR: usize = 3;

impl Dumper {
    pub(super) fn dump_array(
        &self,
        array: &Array,
        parents: &mut Ancestors,
        frame: Frame,
    ) -> Result<String> {
        let data = array.borrow();
        if data.entries.is_empty() {
            return Ok("[]".to_string());
        }

        let container = Container::Array(array.clone());
        self.guard(&container, parents, frame)?;

        let keys: Vec<&Key> = data.entries.keys().collect();
        let key_parts = key_parts(&keys);
        let values: Vec<_> = data.entries.values().collect();

        parents.within(container, |parents| {
            let mut inline = String::new();
            for (key_part, value) in key_parts.iter().zip(&values) {
                if !inline.is_empty() {
                    inline.push_str(", ");
                }
                inline.push_str(key_part);
                let child = frame.inline_child(frame.column + inline.len());
                inline.push_str(&self.dump_var(value, parents, child)?);
            }

            let budget = frame.level * self.config.indentation.width()
                + frame.column
                + inline.len()
                + BRACKETS_AND_SEPARATOR;
            if !inline.contains('\n') && budget <= self.config.wrap_length {
                return Ok(format!("[{}]", inline));
            }

            let unit = self.config.indentation.as_str();
            let space = self.config.indentation.repeat(frame.level);
            let mut wrapped = format!("\n{}", space);
            for (key_part, value) in key_parts.iter().zip(&values) {
                let child = frame.wrapped_child(key_part.len());
                wrapped.push_str(unit);
                wrapped.push_str(key_part);
                wrapped.push_str(&self.dump_var(value, parents, child)?);
                wrapped.push_str(",\n");
                wrapped.push_str(&space);
            }
            Ok(format!("[{}]", wrapped))
        })
    }
}

/// The `key => ` prefix of every entry, empty where the key is implied.
///
/// Keys are implied only when the array's keys form a run of consecutive
/// integers, and then only for keys equal to the next index PHP would
/// assign, which starts at 0. So `[0 => a, 1 => b]` prints no keys while
/// `[10 => a, 11 => b]` prints `10 => ` and leaves `11` implied.
fn key_parts(keys: &[&Key]) -> Vec<String> {
    let hide_keys = is_consecutive(keys);
    let mut counter: i64 = 0;

    keys.iter()
        .map(|key| {
            let part = if hide_keys && **key == Key::Int(counter) {
                String::new()
            } else {
                format!("{} => ", dump_key(key))
            };
            if let Key::Int(i) = key {
                counter = counter.max(i.saturating_add(1));
            }
            part
        })
        .collect()
}

fn is_consecutive(keys: &[&Key]) -> bool {
    let Some(Key::Int(first)) = keys.first() else {
        return false;
    };
    keys.iter().enumerate().all(|(offset, key)| {
        i64::try_from(offset)
            .ok()
            .and_then(|offset| first.checked_add(offset))
            .is_some_and(|expected| **key == Key::Int(expected))
    })
}

fn dump_key(key: &Key) -> String {
    match key {
        Key::Int(i) => super::scalar::dump_int(*i),
        Key::Str(s) => string::dump_string(s.as_bytes()),
    }
}
