//! Qualified object references
//!
//! A qualified reference is the `bucket/key` string the storage service
//! understands as a copy source. Keys may themselves contain `/`; the bucket
//! length is remembered so the key can be recovered unchanged.

use std::fmt;

/// A `bucket/key` reference to one object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedRef {
    full: String,
    split: usize,
}

impl QualifiedRef {
    /// Create a reference by concatenating bucket and key
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            full: format!("{bucket}/{key}"),
            split: bucket.len(),
        }
    }

    /// Object key within the bucket
    pub fn key(&self) -> &str {
        &self.full[self.split + 1..]
    }

    /// The full `bucket/key` string
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for QualifiedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
