//! Latin-1 / Windows-1251 helpers for mojibake recovery.
//!
//! Cyrillic tags written as Windows-1251 bytes are often decoded as Latin-1
//! somewhere upstream, producing strings like "Àïîñòðîô". Those misreads are
//! lossless: every byte survives as a code point <= U+00FF, so the original
//! bytes can be reconstructed and re-decoded with the right code page.

use encoding_rs::WINDOWS_1251;

/// true iff every code point is <= U+00FF
pub fn is_all_latin1(s: &str) -> bool {
    s.chars().all(|c| (c as u32) <= 0xFF)
}

/// Reduce each code point to a single Latin-1 byte.
///
/// Returns `None` if any code point is above U+00FF.
pub fn utf8_to_latin1(s: &str) -> Option<Vec<u8>> {
    s.chars()
        .map(|c| {
            let cp = c as u32;
            if cp <= 0xFF {
                Some(cp as u8)
            } else {
                None
            }
        })
        .collect()
}

/// Decode bytes as Windows-1251.
pub fn windows1251_to_utf8(bytes: &[u8]) -> String {
    let (decoded, _, _) = WINDOWS_1251.decode(bytes);
    decoded.into_owned()
}

/// Heuristic: do these bytes read more plausibly as Windows-1251 than as
/// Latin-1?
///
/// True iff there is at least one byte in 0x80-0xFF, every such byte decodes
/// to a Cyrillic character (the unassigned 0x98 therefore fails), and no
/// ASCII letters are mixed in. Fully-Cyrillic mojibake passes; accented Latin
/// text ("Café") keeps its ASCII letters and is left alone.
pub fn could_be_windows1251(bytes: &[u8]) -> bool {
    if bytes.iter().any(|b| b.is_ascii_alphabetic()) {
        return false;
    }

    let (decoded, _, _) = WINDOWS_1251.decode(bytes);
    let mut saw_cyrillic = false;
    for c in decoded.chars() {
        if c.is_ascii() {
            continue;
        }
        if !('\u{0400}'..='\u{04FF}').contains(&c) {
            return false;
        }
        saw_cyrillic = true;
    }
    saw_cyrillic
}
