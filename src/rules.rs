//! Insertion-ordered regex substitution rules.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered mapping from regex pattern source text to replacement text.
///
/// Entries keep their insertion order, which is the order the transform
/// pipeline applies them in. Re-inserting an existing pattern overwrites its
/// replacement in place without moving the entry, so a rule's position in
/// the pipeline is decided by its first insertion.
///
/// Serializes as a flat JSON object; key order survives a save/load round
/// trip.
///
/// ```
/// use txtnorm::RuleSet;
///
/// let mut rules = RuleSet::new();
/// rules.insert("colou?r", "color");
/// rules.insert(r"\bgrey\b", "gray");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.get("colou?r"), Some("color"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<(String, String)>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, or overwrites the replacement of an existing pattern
    /// without changing its position.
    pub fn insert(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        let pattern = pattern.into();
        let replacement = replacement.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = replacement,
            None => self.entries.push((pattern, replacement)),
        }
    }

    /// Returns the replacement for `pattern`, if present.
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, r)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates `(pattern, replacement)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }
}

impl FromIterator<(String, String)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (pattern, replacement) in iter {
            rules.insert(pattern, replacement);
        }
        rules
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for RuleSet {
    fn from(pairs: [(&'a str, &'a str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(p, r)| (p.to_string(), r.to_string()))
            .collect()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, (pattern, replacement)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pattern:?} => {replacement:?}")?;
        }
        Ok(())
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, replacement) in &self.entries {
            map.serialize_entry(pattern, replacement)?;
        }
        map.end()
    }
}

struct RuleSetVisitor;

impl<'de> Visitor<'de> for RuleSetVisitor {
    type Value = RuleSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object mapping regex patterns to replacements")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut rules = RuleSet::new();
        // Duplicate keys in the file collapse the same way insert() does:
        // last value wins, first position wins.
        while let Some((pattern, replacement)) = access.next_entry::<String, String>()? {
            rules.insert(pattern, replacement);
        }
        Ok(rules)
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RuleSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut rules = RuleSet::new();
        rules.insert("alpha", "a");
        rules.insert("beta", "b");
        rules.insert("gamma", "c");

        let pairs: Vec<_> = rules.iter().collect();
        assert_eq!(
            pairs,
            vec![("alpha", "a"), ("beta", "b"), ("gamma", "c")]
        );
    }

    #[test]
    fn reinsert_overwrites_in_place() {
        let mut rules = RuleSet::new();
        rules.insert("alpha", "1");
        rules.insert("beta", "2");
        rules.insert("alpha", "3");

        let pairs: Vec<_> = rules.iter().collect();
        assert_eq!(pairs, vec![("alpha", "3"), ("beta", "2")]);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn json_round_trip_preserves_order_and_values() {
        let rules = RuleSet::from([("zeta", ""), ("alpha", "x"), ("mid", "y")]);

        let json = serde_json::to_string(&rules).expect("serialize");
        let parsed: RuleSet = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(parsed, rules);
        let pairs: Vec<_> = parsed.iter().collect();
        assert_eq!(pairs, vec![("zeta", ""), ("alpha", "x"), ("mid", "y")]);
    }

    #[test]
    fn duplicate_json_keys_collapse_in_place() {
        let parsed: RuleSet =
            serde_json::from_str(r#"{"a":"1","b":"2","a":"3"}"#).expect("deserialize");

        let pairs: Vec<_> = parsed.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn display_renders_in_order() {
        let rules = RuleSet::from([("foo", "bar"), ("baz", "")]);
        assert_eq!(rules.to_string(), r#""foo" => "bar", "baz" => """#);
        assert_eq!(RuleSet::new().to_string(), "(empty)");
    }
}
