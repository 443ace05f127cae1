use std::io::{Read, Seek, SeekFrom};

use tracing::{debug, warn};

use crate::core::{Id3v2Header, Metadata, FLAC_MARKER, ID3V2_IDENTIFIER};
use crate::error::{Result, TagError};

/// METADATA_BLOCK type for vorbis comments
const BLOCK_TYPE_VORBIS_COMMENT: u8 = 4;

/// bit 7 of the block header marks the last metadata block
const LAST_BLOCK_FLAG: u8 = 0x80;

/// binary reader for the FLAC metadata section
pub struct FlacReader;

impl FlacReader {
    /// new reader
    pub fn new() -> Self {
        FlacReader
    }

    /// Read the metadata block section of a FLAC stream.
    ///
    /// A leading ID3v2 tag is consumed first if present. Only VORBIS_COMMENT
    /// blocks contribute entries; every other block is skipped. The walk
    /// stops after the block whose last-block flag is set, leaving the reader
    /// positioned at the start of the audio frames.
    pub fn read<R: Read + Seek>(&self, reader: &mut R) -> Result<Metadata> {
        let mut marker = [0u8; 4];
        read_exact(reader, &mut marker)?;

        if marker[..3] == ID3V2_IDENTIFIER {
            reader.seek(SeekFrom::Start(0))?;
            skip_id3v2(reader)?;
            read_exact(reader, &mut marker)?;
        }

        if marker != FLAC_MARKER {
            return Err(TagError::InvalidStreamMarker);
        }

        let mut metadata = Metadata::new();

        loop {
            // block header: flag bit + 7-bit type, then 24-bit BE length
            let mut header = [0u8; 4];
            read_exact(reader, &mut header)?;
            let last = header[0] & LAST_BLOCK_FLAG != 0;
            let block_type = header[0] & !LAST_BLOCK_FLAG;
            let length = u32::from_be_bytes([0, header[1], header[2], header[3]]);

            if block_type == BLOCK_TYPE_VORBIS_COMMENT {
                debug!(length, "parsing vorbis comment block");
                self.read_vorbis_comments(reader, length, &mut metadata)?;
            } else {
                debug!(block_type, length, "skipping metadata block");
                reader.seek(SeekFrom::Current(i64::from(length)))?;
            }

            if last {
                break;
            }
        }

        Ok(metadata)
    }

    fn read_vorbis_comments<R: Read>(
        &self,
        reader: &mut R,
        length: u32,
        metadata: &mut Metadata,
    ) -> Result<()> {
        // vendor length prefix + comment count, at minimum
        if length < 8 {
            return Err(TagError::MalformedBlock(
                "vorbis comment block shorter than its length prefixes",
            ));
        }

        let mut block = vec![0u8; length as usize];
        read_exact(reader, &mut block)?;
        let mut cursor = Cursor::new(&block);

        let vendor_length = cursor.read_u32_le()? as usize;
        let vendor = cursor.read_bytes(vendor_length)?;
        metadata.vendor = Some(String::from_utf8_lossy(vendor).into_owned());

        let comment_count = cursor.read_u32_le()?;
        for _ in 0..comment_count {
            let comment_length = cursor.read_u32_le()? as usize;
            let raw = cursor.read_bytes(comment_length)?;
            let comment = String::from_utf8_lossy(raw);

            // split at the first '='; the value may contain further '='
            let (name, value) = match comment.split_once('=') {
                Some((name, value)) => (name, value),
                None => (comment.as_ref(), ""),
            };

            if name.is_empty() {
                warn!("skipping vorbis comment with an empty field name");
                continue;
            }
            metadata.map.put(name, value);
        }

        Ok(())
    }
}

impl Default for FlacReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance past an ID3v2 tag, returning its parsed header.
///
/// The reader must be positioned at the start of the tag; on return it sits
/// immediately after it (footer included, when the header declares one).
pub fn skip_id3v2<R: Read + Seek>(reader: &mut R) -> Result<Id3v2Header> {
    let mut raw = [0u8; 10];
    read_exact(reader, &mut raw)?;

    if raw[..3] != ID3V2_IDENTIFIER {
        return Err(TagError::MalformedBlock("missing ID3v2 identifier"));
    }

    // the four size bytes are synchsafe: bit 7 must be clear in each
    let mut size: u32 = 0;
    for &byte in &raw[6..10] {
        if byte & 0x80 != 0 {
            return Err(TagError::MalformedBlock("ID3v2 size is not synchsafe"));
        }
        size = (size << 7) | u32::from(byte);
    }

    let header = Id3v2Header {
        major_version: raw[3],
        revision: raw[4],
        flags: raw[5],
        size,
    };

    let footer = if header.has_footer() { 10 } else { 0 };
    debug!(size, footer, "skipping id3v2 tag");
    reader.seek(SeekFrom::Current(i64::from(size) + footer))?;

    Ok(header)
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => TagError::UnexpectedEndOfStream,
        _ => TagError::Io(e),
    })
}

// cursor over a block payload

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.data.len() - self.pos {
            return Err(TagError::MalformedBlock(
                "declared length runs past the block",
            ));
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
