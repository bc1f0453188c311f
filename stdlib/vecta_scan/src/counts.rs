use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-class detection counts from one scan, kept in first-seen order.
///
/// Class names are an open set. Adding to a class that is already present
/// updates it in place and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionCounts {
    entries: Vec<(String, u32)>,
}

impl DetectionCounts {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Count one more detection of `class`.
    pub fn record(&mut self, class: &str) {
        self.add(class, 1);
    }

    pub fn add(&mut self, class: &str, count: u32) {
        match self.entries.iter_mut().find(|(name, _)| name == class) {
            Some((_, n)) => *n = n.saturating_add(count),
            None => self.entries.push((class.to_string(), count)),
        }
    }

    pub fn get(&self, class: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == class)
            .map(|(_, n)| *n)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when at least one class has a positive count.
    pub fn has_detections(&self) -> bool {
        self.entries.iter().any(|(_, n)| *n > 0)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(name, n)| (name.as_str(), *n))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for DetectionCounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut counts = DetectionCounts::new();
        for (class, n) in iter {
            counts.add(class.as_ref(), n);
        }
        counts
    }
}

/// Python-style `{'Tire': 2, 'Bottle': 1}` rendering, as stored in scan logs.
impl fmt::Display for DetectionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, n)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{name}': {n}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for DetectionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, n) in &self.entries {
            map.serialize_entry(name, n)?;
        }
        map.end()
    }
}

struct CountsVisitor;

impl<'de> Visitor<'de> for CountsVisitor {
    type Value = DetectionCounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of class name to detection count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = DetectionCounts::new();
        while let Some((class, n)) = access.next_entry::<String, u32>()? {
            counts.add(&class, n);
        }
        Ok(counts)
    }
}

impl<'de> Deserialize<'de> for DetectionCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CountsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_keeps_first_seen_order() {
        let mut c = DetectionCounts::new();
        for label in ["Vase", "Tire", "Vase", "Bottle", "Tire", "Vase"] {
            c.record(label);
        }
        let got: Vec<(&str, u32)> = c.iter().collect();
        assert_eq!(got, vec![("Vase", 3), ("Tire", 2), ("Bottle", 1)]);
        assert_eq!(c.total(), 6);
    }

    #[test]
    fn zero_counts_are_kept_but_not_detections() {
        let c: DetectionCounts = [("Tire", 0u32)].into_iter().collect();
        assert_eq!(c.len(), 1);
        assert!(!c.has_detections());
        assert_eq!(c.get("Tire"), Some(0));
        assert_eq!(c.get("Vase"), None);
    }

    #[test]
    fn json_object_order_is_preserved() {
        let c: DetectionCounts =
            serde_json::from_str(r#"{"Vase": 1, "Drain-Inlet": 2, "Bottle": 4}"#).unwrap();
        let names: Vec<&str> = c.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Vase", "Drain-Inlet", "Bottle"]);
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"Vase":1,"Drain-Inlet":2,"Bottle":4}"#
        );
    }

    #[test]
    fn display_matches_log_format() {
        let c: DetectionCounts = [("Tire", 2u32), ("Bottle", 1)].into_iter().collect();
        assert_eq!(c.to_string(), "{'Tire': 2, 'Bottle': 1}");
        assert_eq!(DetectionCounts::new().to_string(), "{}");
    }
}
