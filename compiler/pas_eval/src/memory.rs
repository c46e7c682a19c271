//! Variable storage for one evaluation.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Value;

/// Name-to-value store. Created empty per evaluation; assignment overwrites.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Memory {
    slots: FxHashMap<String, Value>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.slots.get(name).copied()
    }

    /// Store `value` under `name`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.slots.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.slots.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Entries sorted by name.
    pub fn sorted(&self) -> Vec<(&str, Value)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Memory {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Memory {
            slots: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// `{x: 14, y: 2.5}`, sorted by name.
impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
