//! DOT attribute-block parsing and formatting.

use impviz_error::{Error, Result};

/// An insertion-ordered `key=value` mapping, as it appears in the trailing
/// `[...]` block of a DOT declaration line.
///
/// The analyzer's attribute order is preserved on re-emission; inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    entries: Vec<(String, String)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the attribute block of a declaration line.
    ///
    /// `block` is everything after the first `[` of the line: a
    /// comma-separated `key=value` list terminated by `];`.
    pub fn parse(block: &str) -> Result<Self> {
        let inner = block.trim().strip_suffix("];").ok_or_else(|| {
            Error::parse_failed("attribute block does not end with `];`")
                .with_operation("dot::AttrMap::parse")
                .with_context("block", block)
        })?;

        let mut map = Self::new();
        for entry in inner.split(',') {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                Error::parse_failed("attribute entry without `=`")
                    .with_operation("dot::AttrMap::parse")
                    .with_context("entry", entry)
            })?;
            map.insert(key, value);
        }
        Ok(map)
    }

    /// Insert an attribute, replacing the value if the key is present.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format back into a DOT attribute block, `[k=v,...];`.
    pub fn to_dot(&self) -> String {
        let middle = self
            .entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("[{middle}];")
    }
}
