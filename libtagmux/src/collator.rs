//! Tag collation: reconciling every tag block in a file into one view.
//!
//! Single-valued queries walk a precomputed tag permutation so the
//! duplicate-tag strategy can choose among same-format tags. Multi-valued
//! queries instead walk formats in prioritization order and let the
//! [`CollatedTextSet`] deduplicate, honoring last-resort suppression so that
//! truncated ID3v1 leftovers never pollute a result another format already
//! filled.

use crate::core::{
    fields, AllMetadata, CollatedTextSet, CollationConfig, DuplicateTagStrategy, FieldKeys,
    Priority, TagFormat, TypedMetadata,
};

/// Unified, read-only view over the tag blocks of a single file.
///
/// Borrows the parsed [`AllMetadata`]; single-valued lookups return string
/// slices borrowed from it. All queries are pure functions of the metadata
/// and the [`CollationConfig`].
pub struct Collator<'a> {
    all: &'a AllMetadata,
    config: CollationConfig,
    tag_indexes_by_priority: Vec<usize>,
}

impl<'a> Collator<'a> {
    pub fn new(all: &'a AllMetadata, config: CollationConfig) -> Self {
        let tag_indexes_by_priority = build_tag_order(all, &config);
        Collator {
            all,
            config,
            tag_indexes_by_priority,
        }
    }

    /// The order in which tag blocks are consulted for single-valued queries.
    ///
    /// Covers every tag, or one tag per format under
    /// [`DuplicateTagStrategy::IgnoreDuplicates`].
    pub fn tag_indexes_by_priority(&self) -> &[usize] {
        &self.tag_indexes_by_priority
    }

    /// First value found for `field`, walking tags in priority order.
    pub fn prioritized_value(&self, field: &FieldKeys) -> Option<&'a str> {
        for &index in &self.tag_indexes_by_priority {
            let tag = &self.all.tags[index];
            let Some(key) = field.for_format(tag.format()) else {
                continue;
            };
            if let Some(value) = tag.map().get_first(key) {
                return Some(value);
            }
        }
        None
    }

    /// Every distinct value for `field` across all tags, deduplicated and in
    /// prioritization-then-file order.
    ///
    /// Formats marked [`Priority::LastResort`] are skipped entirely once any
    /// earlier format has contributed.
    pub fn values_from_keys(&self, field: &FieldKeys) -> Vec<String> {
        let mut set = CollatedTextSet::new();

        for &format in &self.config.prioritization.order {
            if self.config.prioritization.priority(format) == Priority::LastResort
                && !set.is_empty()
            {
                continue;
            }
            for index in self.all.indexes_of(format) {
                add_values_to_set(&self.all.tags[index], field, &mut set);
            }
        }

        set.into_values()
    }

    // convenience bindings

    pub fn artist(&self) -> Option<&'a str> {
        self.prioritized_value(&fields::ARTIST)
    }

    pub fn artists(&self) -> Vec<String> {
        self.values_from_keys(&fields::ARTIST)
    }

    pub fn album(&self) -> Option<&'a str> {
        self.prioritized_value(&fields::ALBUM)
    }

    pub fn albums(&self) -> Vec<String> {
        self.values_from_keys(&fields::ALBUM)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.prioritized_value(&fields::TITLE)
    }

    pub fn titles(&self) -> Vec<String> {
        self.values_from_keys(&fields::TITLE)
    }

    pub fn album_artist(&self) -> Option<&'a str> {
        self.prioritized_value(&fields::ALBUM_ARTIST)
    }

    pub fn album_artists(&self) -> Vec<String> {
        self.values_from_keys(&fields::ALBUM_ARTIST)
    }

    pub fn genre(&self) -> Option<&'a str> {
        self.prioritized_value(&fields::GENRE)
    }

    pub fn genres(&self) -> Vec<String> {
        self.values_from_keys(&fields::GENRE)
    }

    /// Raw track number value ("5" or "5/12" depending on the source).
    pub fn track_number(&self) -> Option<&'a str> {
        self.prioritized_value(&fields::TRACK_NUMBER)
    }
}

/// Feed one tag's values for `field` into the set.
///
/// ID3v1 contributes at most one value per key; every other format
/// contributes all of them.
fn add_values_to_set(tag: &TypedMetadata, field: &FieldKeys, set: &mut CollatedTextSet) {
    let Some(key) = field.for_format(tag.format()) else {
        return;
    };

    match tag.format() {
        TagFormat::Id3v1 => {
            if let Some(value) = tag.map().get_first(key) {
                set.put(value);
            }
        }
        _ => {
            for value in tag.map().values(key) {
                set.put(value);
            }
        }
    }
}

/// Build the tag consultation order for single-valued queries.
fn build_tag_order(all: &AllMetadata, config: &CollationConfig) -> Vec<usize> {
    let mut indexes = Vec::with_capacity(all.len());

    for &format in &config.prioritization.order {
        let group_start = indexes.len();
        match config.duplicate_tag_strategy {
            DuplicateTagStrategy::PrioritizeFirst => {
                indexes.extend(all.indexes_of(format));
            }
            DuplicateTagStrategy::IgnoreDuplicates => {
                if let Some(first) = all.indexes_of(format).next() {
                    indexes.push(first);
                }
            }
            DuplicateTagStrategy::PrioritizeBest => {
                for index in all.indexes_of(format) {
                    let count = field_count_for_prioritization(&all.tags[index]);
                    // insert before the first group member with strictly
                    // fewer fields; equal counts keep file order
                    let position = indexes[group_start..]
                        .iter()
                        .position(|&other| {
                            count > field_count_for_prioritization(&all.tags[other])
                        })
                        .map(|offset| group_start + offset)
                        .unwrap_or(indexes.len());
                    indexes.insert(position, index);
                }
            }
        }
    }

    indexes
}

/// Populated-field count used to rank same-format tags.
///
/// Entry count is a placeholder heuristic for "which duplicate tag is the
/// most complete"; tests pin the current behavior.
fn field_count_for_prioritization(tag: &TypedMetadata) -> usize {
    match tag {
        TypedMetadata::Id3v2(tag) => tag.metadata.map.len(),
        TypedMetadata::Ape(tag) => tag.metadata.map.len(),
        other => other.map().len(),
    }
}
