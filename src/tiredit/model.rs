//! # Document Model
//!
//! A def file loads into a [`DefDocument`]: an ordered key-value store that
//! remembers the position each key was first inserted at. Writing the file
//! back out walks the keys in that order, which is what makes a
//! load-then-write round trip reproduce the original layout.
//!
//! Values are updated in place — re-setting a key never moves it. Blank
//! lines in the file are represented by synthetic `BLANK000`, `BLANK001`, …
//! keys so they keep their vertical position on rewrite.
//!
//! The store is single-owner and single-threaded; there is no interior
//! mutability and no locking.

use crate::error::{Result, TireditError};
use std::collections::HashMap;

/// Prefix of the synthetic keys that stand in for blank lines.
const BLANK_PREFIX: &str = "BLANK";

/// An insertion-ordered string-to-string map.
///
/// Two documents are equal iff they hold the same keys with the same values
/// in the same order. Cloning duplicates all backing state; a clone and its
/// original share nothing mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefDocument {
    // `keys` carries the order; `values` carries the data. Every key in
    // `keys` has an entry in `values` and vice versa.
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl DefDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the end if the key is new, otherwise updates the value in
    /// place without moving the key's position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| TireditError::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Removes the key and its position record, returning the value.
    pub fn remove(&mut self, key: &str) -> Result<String> {
        let value = self
            .values
            .remove(key)
            .ok_or_else(|| TireditError::KeyNotFound(key.to_string()))?;
        self.keys.retain(|k| k != key);
        Ok(value)
    }

    /// The (key, value) pair at a zero-based position.
    pub fn entry_at(&self, index: usize) -> Result<(&str, &str)> {
        let key = self.keys.get(index).ok_or(TireditError::IndexOutOfRange {
            index,
            len: self.keys.len(),
        })?;
        let value = self.values.get(key).map(String::as_str).unwrap_or_default();
        Ok((key.as_str(), value))
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// (key, value) pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys.iter().map(move |key| {
            let value = self.values.get(key).map(String::as_str).unwrap_or_default();
            (key.as_str(), value)
        })
    }

    /// Position of a key in the insertion order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The synthetic key that stands in for the nth blank line.
pub fn blank_key(n: usize) -> String {
    format!("{}{:03}", BLANK_PREFIX, n)
}

/// True for keys produced by [`blank_key`]: the prefix followed by decimal
/// digits only. A real parameter that merely starts with "BLANK" does not
/// match.
pub fn is_blank_key(key: &str) -> bool {
    match key.strip_prefix(BLANK_PREFIX) {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TireditError;

    #[test]
    fn keys_keep_first_insertion_order() {
        let mut doc = DefDocument::new();
        doc.set("VROT", "100");
        doc.set("INCL", "60");
        doc.set("PA", "45");
        // Updating must not move the key.
        doc.set("VROT", "120");
        doc.set("INCL", "65");

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["VROT", "INCL", "PA"]);
        assert_eq!(doc.get("VROT").unwrap(), "120");
        assert_eq!(doc.get("INCL").unwrap(), "65");
    }

    #[test]
    fn get_unknown_key_fails() {
        let doc = DefDocument::new();
        assert!(matches!(
            doc.get("VROT"),
            Err(TireditError::KeyNotFound(k)) if k == "VROT"
        ));
    }

    #[test]
    fn remove_drops_key_and_position() {
        let mut doc = DefDocument::new();
        doc.set("A", "1");
        doc.set("B", "2");
        doc.set("C", "3");

        assert_eq!(doc.position("C"), Some(2));
        assert_eq!(doc.remove("B").unwrap(), "2");
        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["A", "C"]);
        assert_eq!(doc.position("C"), Some(1));
        assert_eq!(doc.position("B"), None);
        assert!(doc.remove("B").is_err());
    }

    #[test]
    fn entry_at_respects_order_and_bounds() {
        let mut doc = DefDocument::new();
        doc.set("A", "1");
        doc.set("B", "2");

        assert_eq!(doc.entry_at(1).unwrap(), ("B", "2"));
        assert!(matches!(
            doc.entry_at(2),
            Err(TireditError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut a = DefDocument::new();
        a.set("X", "1");
        a.set("Y", "2");

        let mut b = DefDocument::new();
        b.set("Y", "2");
        b.set("X", "1");

        assert_ne!(a, b);

        let mut c = DefDocument::new();
        c.set("X", "1");
        c.set("Y", "2");
        assert_eq!(a, c);
    }

    #[test]
    fn clone_shares_no_state() {
        let mut original = DefDocument::new();
        original.set("A", "1");
        let copy = original.clone();

        original.set("A", "changed");
        original.set("B", "2");

        assert_eq!(copy.get("A").unwrap(), "1");
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn blank_keys_are_zero_padded() {
        assert_eq!(blank_key(0), "BLANK000");
        assert_eq!(blank_key(42), "BLANK042");
        assert_eq!(blank_key(1000), "BLANK1000");
    }

    #[test]
    fn blank_key_pattern_requires_digits() {
        assert!(is_blank_key("BLANK000"));
        assert!(is_blank_key("BLANK007"));
        assert!(!is_blank_key("BLANK"));
        assert!(!is_blank_key("BLANKY"));
        assert!(!is_blank_key("BLANK00X"));
        assert!(!is_blank_key("VROT"));
    }
}
