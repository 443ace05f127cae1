//! Insertion-ordered multimap of raw tag entries.
//!
//! Keys and values are stored exactly as the source format spelled them:
//! no trimming, case folding, or deduplication happens at this layer.
//! Collation depends on observing raw casing when choosing representatives,
//! so preserving the source bytes is a contract.

/// Ordered multimap from raw tag key to one or more raw values.
///
/// Keys are not unique; duplicate keys are kept as separate entries in
/// insertion order. Lookup is byte-exact (case-sensitive even for formats
/// whose keys are nominally case-insensitive, like Vorbis).
#[derive(Debug, Clone, Default)]
pub struct MetadataMap {
    entries: Vec<(String, String)>,
}

impl MetadataMap {
    /// new empty map
    pub fn new() -> Self {
        MetadataMap {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Keys must be non-empty; parsers guarantee this.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value whose key is byte-equal to `key`, if any.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key` in insertion order.
    pub fn values<'m>(&'m self, key: &'m str) -> impl Iterator<Item = &'m str> + 'm {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Total entry count, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
