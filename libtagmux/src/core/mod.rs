pub mod encoding;
pub mod map;
pub mod metadata;
pub mod textset;
pub mod types;

pub use encoding::{could_be_windows1251, is_all_latin1, utf8_to_latin1, windows1251_to_utf8};
pub use map::MetadataMap;
pub use metadata::{
    AllMetadata, ApeHeader, ApeMetadata, Id3v2Header, Id3v2Metadata, Metadata, TypedMetadata,
};
pub use textset::CollatedTextSet;
pub use types::{
    fields, CollationConfig, DuplicateTagStrategy, FieldKeys, Prioritization, Priority, TagFormat,
    FLAC_MARKER, ID3V2_IDENTIFIER,
};
