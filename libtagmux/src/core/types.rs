//! common types for tag collation

use serde::{Deserialize, Serialize};

// constants

/// FLAC stream marker "fLaC"
pub const FLAC_MARKER: [u8; 4] = [0x66, 0x4c, 0x61, 0x43];

/// ID3v2 tag identifier "ID3"
pub const ID3V2_IDENTIFIER: [u8; 3] = [0x49, 0x44, 0x33];

// formats

/// The kind of tag block a file can embed.
///
/// The set is closed: collation internals switch exhaustively on it, and
/// adding a format means extending the field descriptors, the prioritization
/// arrays, and the field-count heuristic together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFormat {
    Id3v1,
    Id3v2,
    Flac,
    Vorbis,
    Ape,
    Mp4,
}

impl TagFormat {
    /// Number of formats in the closed set.
    pub const COUNT: usize = 6;

    /// All formats, in declaration order.
    pub const ALL: [TagFormat; TagFormat::COUNT] = [
        TagFormat::Id3v1,
        TagFormat::Id3v2,
        TagFormat::Flac,
        TagFormat::Vorbis,
        TagFormat::Ape,
        TagFormat::Mp4,
    ];

    /// Stable ordinal used to index per-format arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            TagFormat::Id3v1 => "id3v1",
            TagFormat::Id3v2 => "id3v2",
            TagFormat::Flac => "flac",
            TagFormat::Vorbis => "vorbis",
            TagFormat::Ape => "ape",
            TagFormat::Mp4 => "mp4",
        }
    }
}

impl std::fmt::Display for TagFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// prioritization

/// How much weight a format's tags carry during multi-value collation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    /// Contributes only when no normal-priority format contributed anything.
    LastResort,
}

/// How tags of the same format within one file are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateTagStrategy {
    /// Within a format, consult the tag with the most populated fields first.
    #[default]
    PrioritizeBest,
    /// Within a format, consult tags in file order.
    PrioritizeFirst,
    /// Only the first tag of each format is visible.
    IgnoreDuplicates,
}

/// Format consultation order plus a per-format [`Priority`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prioritization {
    /// Formats in the order they are consulted.
    pub order: [TagFormat; TagFormat::COUNT],
    priorities: [Priority; TagFormat::COUNT],
}

impl Prioritization {
    pub fn priority(&self, format: TagFormat) -> Priority {
        self.priorities[format.index()]
    }

    /// Override the priority of one format.
    pub fn with_priority(mut self, format: TagFormat, priority: Priority) -> Self {
        self.priorities[format.index()] = priority;
        self
    }
}

impl Default for Prioritization {
    fn default() -> Self {
        Prioritization {
            order: [
                TagFormat::Mp4,
                TagFormat::Flac,
                TagFormat::Vorbis,
                TagFormat::Id3v2,
                TagFormat::Ape,
                TagFormat::Id3v1,
            ],
            priorities: [Priority::Normal; TagFormat::COUNT],
        }
        .with_priority(TagFormat::Id3v1, Priority::LastResort)
    }
}

/// Collation settings: format prioritization + duplicate-tag strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollationConfig {
    #[serde(default)]
    pub prioritization: Prioritization,
    #[serde(default)]
    pub duplicate_tag_strategy: DuplicateTagStrategy,
}

// field descriptors

/// Per-format raw key names for one logical field.
///
/// `None` means the format does not carry the field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKeys {
    pub id3v1: Option<&'static str>,
    pub id3v2: Option<&'static str>,
    pub flac: Option<&'static str>,
    pub vorbis: Option<&'static str>,
    pub ape: Option<&'static str>,
    pub mp4: Option<&'static str>,
}

impl FieldKeys {
    /// The raw key this field uses in `format`, if the format carries it.
    pub const fn for_format(&self, format: TagFormat) -> Option<&'static str> {
        match format {
            TagFormat::Id3v1 => self.id3v1,
            TagFormat::Id3v2 => self.id3v2,
            TagFormat::Flac => self.flac,
            TagFormat::Vorbis => self.vorbis,
            TagFormat::Ape => self.ape,
            TagFormat::Mp4 => self.mp4,
        }
    }
}

/// Logical field descriptors for the fields the collator projects.
///
/// Key spellings match what each format actually writes: ID3v2 frame ids,
/// uppercase Vorbis field names, APE's mixed-case items, and the `©`-prefixed
/// MP4 atoms.
pub mod fields {
    use super::FieldKeys;

    pub const ARTIST: FieldKeys = FieldKeys {
        id3v1: Some("artist"),
        id3v2: Some("TPE1"),
        flac: Some("ARTIST"),
        vorbis: Some("ARTIST"),
        ape: Some("Artist"),
        mp4: Some("\u{a9}ART"),
    };

    pub const ALBUM: FieldKeys = FieldKeys {
        id3v1: Some("album"),
        id3v2: Some("TALB"),
        flac: Some("ALBUM"),
        vorbis: Some("ALBUM"),
        ape: Some("Album"),
        mp4: Some("\u{a9}alb"),
    };

    pub const TITLE: FieldKeys = FieldKeys {
        id3v1: Some("title"),
        id3v2: Some("TIT2"),
        flac: Some("TITLE"),
        vorbis: Some("TITLE"),
        ape: Some("Title"),
        mp4: Some("\u{a9}nam"),
    };

    pub const ALBUM_ARTIST: FieldKeys = FieldKeys {
        id3v1: None,
        id3v2: Some("TPE2"),
        flac: Some("ALBUMARTIST"),
        vorbis: Some("ALBUMARTIST"),
        ape: Some("Album Artist"),
        mp4: Some("aART"),
    };

    pub const GENRE: FieldKeys = FieldKeys {
        id3v1: Some("genre"),
        id3v2: Some("TCON"),
        flac: Some("GENRE"),
        vorbis: Some("GENRE"),
        ape: Some("Genre"),
        mp4: Some("\u{a9}gen"),
    };

    pub const TRACK_NUMBER: FieldKeys = FieldKeys {
        id3v1: Some("track"),
        id3v2: Some("TRCK"),
        flac: Some("TRACKNUMBER"),
        vorbis: Some("TRACKNUMBER"),
        ape: Some("Track"),
        mp4: Some("trkn"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prioritization_order() {
        let p = Prioritization::default();
        assert_eq!(p.order[0], TagFormat::Mp4);
        assert_eq!(p.order[5], TagFormat::Id3v1);
        assert_eq!(p.priority(TagFormat::Id3v1), Priority::LastResort);
        assert_eq!(p.priority(TagFormat::Flac), Priority::Normal);
    }

    #[test]
    fn field_keys_cover_formats() {
        assert_eq!(fields::ARTIST.for_format(TagFormat::Id3v2), Some("TPE1"));
        assert_eq!(fields::ARTIST.for_format(TagFormat::Mp4), Some("©ART"));
        assert_eq!(fields::ALBUM_ARTIST.for_format(TagFormat::Id3v1), None);
    }
}
