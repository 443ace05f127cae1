//! libtagmux: read-only multi-format audio tag collation
//!
//! Heterogeneous tag blocks (ID3v1, ID3v2, FLAC/Vorbis comments, APE, MP4)
//! are unified into one view keyed by logical field names. Format parsers
//! produce [`TypedMetadata`] blocks; a [`Collator`] reconciles them per
//! field by format priority, duplicate-tag strategy, and population
//! heuristics, deduplicating text across encodings, normalization forms,
//! and case.
//!
//! ```
//! use libtagmux::{AllMetadata, CollationConfig, Collator, Metadata, TypedMetadata};
//!
//! let mut flac = Metadata::new();
//! flac.map.put("ARTIST", "Some Artist");
//!
//! let all = AllMetadata::new(vec![TypedMetadata::Flac(flac)]);
//! let collator = Collator::new(&all, CollationConfig::default());
//! assert_eq!(collator.artist(), Some("Some Artist"));
//! ```

pub mod core;

mod collator;
mod error;
mod reader;

pub use crate::core::{
    fields, AllMetadata, ApeHeader, ApeMetadata, CollatedTextSet, CollationConfig,
    DuplicateTagStrategy, FieldKeys, Id3v2Header, Id3v2Metadata, Metadata, MetadataMap,
    Prioritization, Priority, TagFormat, TypedMetadata, FLAC_MARKER, ID3V2_IDENTIFIER,
};
pub use collator::Collator;
pub use error::{Result, TagError};
pub use reader::{skip_id3v2, FlacReader};
