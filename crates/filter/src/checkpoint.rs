//! The dataset-writing seam used by filters at checkpoint time.

use std::collections::BTreeMap;

use crate::error::FilterError;

/// One filter's record inside a checkpoint file.
///
/// Backends map attributes and datasets onto their own storage. Filters only
/// ever write through this trait, so the filter crate stays independent of
/// the file format.
pub trait CheckpointRecord {
    /// Writes a string attribute.
    fn write_str_attribute(&mut self, name: &str, value: &str) -> Result<(), FilterError>;

    /// Writes an integer attribute.
    fn write_int_attribute(&mut self, name: &str, value: i32) -> Result<(), FilterError>;

    /// Writes a one-dimensional integer dataset.
    fn write_dataset(&mut self, name: &str, values: &[i32]) -> Result<(), FilterError>;
}

/// A value stored in a [`MemoryRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    /// String attribute.
    Str(String),
    /// Integer attribute.
    Int(i32),
    /// Integer dataset.
    Dataset(Vec<i32>),
}

/// In-memory [`CheckpointRecord`], mostly useful for inspection and tests.
///
/// Writing the same name twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRecord {
    entries: BTreeMap<String, RecordValue>,
}

impl MemoryRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw entry stored under `name`.
    pub fn get(&self, name: &str) -> Option<&RecordValue> {
        self.entries.get(name)
    }

    /// Returns the string attribute `name`.
    pub fn str_attribute(&self, name: &str) -> Option<&str> {
        match self.entries.get(name)? {
            RecordValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer attribute `name`.
    pub fn int_attribute(&self, name: &str) -> Option<i32> {
        match self.entries.get(name)? {
            RecordValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the dataset `name`.
    pub fn dataset(&self, name: &str) -> Option<&[i32]> {
        match self.entries.get(name)? {
            RecordValue::Dataset(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the stored names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl CheckpointRecord for MemoryRecord {
    fn write_str_attribute(&mut self, name: &str, value: &str) -> Result<(), FilterError> {
        self.entries
            .insert(name.to_string(), RecordValue::Str(value.to_string()));
        Ok(())
    }

    fn write_int_attribute(&mut self, name: &str, value: i32) -> Result<(), FilterError> {
        self.entries.insert(name.to_string(), RecordValue::Int(value));
        Ok(())
    }

    fn write_dataset(&mut self, name: &str, values: &[i32]) -> Result<(), FilterError> {
        self.entries
            .insert(name.to_string(), RecordValue::Dataset(values.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let mut rec = MemoryRecord::new();
        rec.write_str_attribute("type", "surface").unwrap();
        rec.write_int_attribute("n_bins", 2).unwrap();
        rec.write_dataset("bins", &[4, 9]).unwrap();

        assert_eq!(rec.str_attribute("type"), Some("surface"));
        assert_eq!(rec.int_attribute("n_bins"), Some(2));
        assert_eq!(rec.dataset("bins"), Some(&[4, 9][..]));
        assert_eq!(rec.names().collect::<Vec<_>>(), vec!["bins", "n_bins", "type"]);
    }

    #[test]
    fn wrong_kind_is_none() {
        let mut rec = MemoryRecord::new();
        rec.write_int_attribute("n_bins", 2).unwrap();
        assert_eq!(rec.str_attribute("n_bins"), None);
        assert_eq!(rec.dataset("n_bins"), None);
        assert_eq!(rec.int_attribute("missing"), None);
    }

    #[test]
    fn rewrite_replaces() {
        let mut rec = MemoryRecord::new();
        rec.write_dataset("bins", &[1]).unwrap();
        rec.write_dataset("bins", &[2, 3]).unwrap();
        assert_eq!(rec.get("bins"), Some(&RecordValue::Dataset(vec![2, 3])));
    }
}
