//! Per-block metadata containers and the file-ordered tag sequence.
//!
//! Parsers produce one [`TypedMetadata`] per tag block they find; a file's
//! blocks are gathered into an [`AllMetadata`] in discovery order, which is
//! what the collator consumes.

use super::map::MetadataMap;
use super::types::TagFormat;

/// A single parsed tag block: its raw entries plus, for Vorbis-comment
/// sources, the vendor string the encoder wrote.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub map: MetadataMap,
    /// Vorbis vendor string, when the source block carried one.
    pub vendor: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }
}

/// ID3v2 tag header (10 bytes on disk).
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3v2Header {
    pub major_version: u8,
    pub revision: u8,
    pub flags: u8,
    /// Declared tag size, excluding header and footer.
    pub size: u32,
}

impl Id3v2Header {
    /// Footer flag (ID3v2.4).
    pub fn has_footer(&self) -> bool {
        self.flags & 0x10 != 0
    }
}

/// An ID3v2 tag block: text frames plus the auxiliary tables the collator
/// treats as opaque.
#[derive(Debug, Clone, Default)]
pub struct Id3v2Metadata {
    pub header: Id3v2Header,
    pub metadata: Metadata,
    /// User-defined text frames (TXXX), description -> value.
    pub user_defined: MetadataMap,
    /// Comment frames (COMM), description -> full text.
    pub comments: MetadataMap,
    /// Unsynchronized lyrics frames (USLT), description -> full text.
    pub unsynchronized_lyrics: MetadataMap,
}

/// APE tag header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApeHeader {
    pub version: u32,
    pub tag_size: u32,
    pub item_count: u32,
    pub flags: u32,
}

/// An APE tag block.
#[derive(Debug, Clone, Default)]
pub struct ApeMetadata {
    pub header: ApeHeader,
    pub metadata: Metadata,
}

/// One tag block, discriminated by its originating format.
#[derive(Debug, Clone)]
pub enum TypedMetadata {
    Id3v1(Metadata),
    Id3v2(Id3v2Metadata),
    Flac(Metadata),
    Vorbis(Metadata),
    Ape(ApeMetadata),
    Mp4(Metadata),
}

impl TypedMetadata {
    pub fn format(&self) -> TagFormat {
        match self {
            TypedMetadata::Id3v1(_) => TagFormat::Id3v1,
            TypedMetadata::Id3v2(_) => TagFormat::Id3v2,
            TypedMetadata::Flac(_) => TagFormat::Flac,
            TypedMetadata::Vorbis(_) => TagFormat::Vorbis,
            TypedMetadata::Ape(_) => TagFormat::Ape,
            TypedMetadata::Mp4(_) => TagFormat::Mp4,
        }
    }

    /// The block's entry map, regardless of format-specific wrapping.
    pub fn map(&self) -> &MetadataMap {
        match self {
            TypedMetadata::Id3v1(m)
            | TypedMetadata::Flac(m)
            | TypedMetadata::Vorbis(m)
            | TypedMetadata::Mp4(m) => &m.map,
            TypedMetadata::Id3v2(t) => &t.metadata.map,
            TypedMetadata::Ape(t) => &t.metadata.map,
        }
    }
}

/// All tag blocks extracted from a single file, in file order.
#[derive(Debug, Clone, Default)]
pub struct AllMetadata {
    pub tags: Vec<TypedMetadata>,
}

impl AllMetadata {
    pub fn new(tags: Vec<TypedMetadata>) -> Self {
        AllMetadata { tags }
    }

    /// Indices of all tags of `format`, in file order.
    pub fn indexes_of(&self, format: TagFormat) -> impl Iterator<Item = usize> + '_ {
        self.tags
            .iter()
            .enumerate()
            .filter(move |(_, tag)| tag.format() == format)
            .map(|(index, _)| index)
    }

    /// Tag count with at most one tag per format.
    pub fn count_ignoring_duplicates(&self) -> usize {
        TagFormat::ALL
            .iter()
            .filter(|&&format| self.tags.iter().any(|tag| tag.format() == format))
            .count()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<Vec<TypedMetadata>> for AllMetadata {
    fn from(tags: Vec<TypedMetadata>) -> Self {
        AllMetadata::new(tags)
    }
}
