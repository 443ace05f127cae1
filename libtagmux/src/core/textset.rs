//! Collated text set: an append-only ordered set of tag values that
//! deduplicates across encodings, Unicode normalization forms, and case.

use std::borrow::Cow;
use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use super::encoding::{could_be_windows1251, utf8_to_latin1, windows1251_to_utf8};

/// Ordered set of representative strings, deduplicated under canonicalization.
///
/// `put` canonicalizes each candidate (trim, optional Windows-1251 recovery,
/// case fold, NFC) and keeps only the first representative per canonical
/// class. The stored representative is the recovered-but-unfolded form, so
/// the first casing seen is what callers get back.
#[derive(Debug, Clone, Default)]
pub struct CollatedTextSet {
    values: Vec<String>,
    indexes: HashMap<String, usize>,
}

impl CollatedTextSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless an equivalent one is already present.
    ///
    /// Values that are empty after trimming ASCII space and NUL are ignored.
    pub fn put(&mut self, value: &str) {
        let trimmed = value.trim_matches(|c| c == ' ' || c == '\0');
        if trimmed.is_empty() {
            return;
        }

        let representative = recover_windows1251(trimmed);
        let folded = caseless::default_case_fold_str(&representative);
        let canonical: String = folded.nfc().collect();

        if !self.indexes.contains_key(&canonical) {
            self.values.push(representative.into_owned());
            self.indexes.insert(canonical, self.values.len() - 1);
        }
    }

    /// Representatives in first-seen order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Consume the set, yielding the representatives in first-seen order.
    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Re-decode a Latin-1 misread of Windows-1251 text, when that is what the
/// string looks like. Anything else passes through untouched.
fn recover_windows1251(trimmed: &str) -> Cow<'_, str> {
    if let Some(bytes) = utf8_to_latin1(trimmed) {
        if could_be_windows1251(&bytes) {
            return Cow::Owned(windows1251_to_utf8(&bytes));
        }
    }
    Cow::Borrowed(trimmed)
}
