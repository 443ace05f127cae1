//! CollatedTextSet tests for libtagmux

use libtagmux::CollatedTextSet;

// ============================================================================
// Empty / Trimming
// ============================================================================

#[test]
fn test_empty_values_rejected() {
    let mut set = CollatedTextSet::new();
    set.put("");
    set.put("   ");
    set.put("\0\0");
    set.put(" \0 \0");

    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
}

#[test]
fn test_trims_spaces_and_nuls() {
    let mut set = CollatedTextSet::new();
    set.put("  hello \0\0");

    assert_eq!(set.values(), ["hello"]);
}

#[test]
fn test_interior_whitespace_preserved() {
    let mut set = CollatedTextSet::new();
    set.put(" two  words ");

    assert_eq!(set.values(), ["two  words"]);
}

// ============================================================================
// Case folding and NFC
// ============================================================================

#[test]
fn test_case_collapse_first_representative_wins() {
    let mut set = CollatedTextSet::new();
    set.put("FlacCase");
    set.put("FLACCASE");
    set.put("flaccase");

    assert_eq!(set.len(), 1);
    assert_eq!(set.values(), ["FlacCase"]);
}

#[test]
fn test_full_case_folding_not_just_lowercasing() {
    // full case folding maps "ß" to "ss", so these collide even though
    // lowercasing alone would keep them apart
    let mut set = CollatedTextSet::new();
    set.put("STRASSE");
    set.put("STRAßE");
    set.put("Strasse");

    assert_eq!(set.len(), 1);
    assert_eq!(set.values(), ["STRASSE"]);
}

#[test]
fn test_nfc_collapse() {
    let mut set = CollatedTextSet::new();
    set.put("foé");
    set.put("foe\u{0301}");

    assert_eq!(set.len(), 1);
    assert_eq!(set.values(), ["foé"]);
}

#[test]
fn test_distinct_values_keep_insertion_order() {
    let mut set = CollatedTextSet::new();
    set.put("One");
    set.put("Two");
    set.put("Three");
    set.put("two");

    assert_eq!(set.values(), ["One", "Two", "Three"]);
}

// ============================================================================
// Windows-1251 recovery
// ============================================================================

#[test]
fn test_windows1251_recovery() {
    // "Апостроф" written as Windows-1251 bytes and misread as Latin-1
    let mut set = CollatedTextSet::new();
    set.put("Àïîñòðîô");

    assert_eq!(set.values(), ["Апостроф"]);
}

#[test]
fn test_recovered_and_native_cyrillic_collapse() {
    let mut set = CollatedTextSet::new();
    set.put("Àïîñòðîô");
    set.put("АПОСТРОФ");

    assert_eq!(set.len(), 1);
    assert_eq!(set.values(), ["Апостроф"]);
}

#[test]
fn test_accented_latin_left_alone() {
    let mut set = CollatedTextSet::new();
    set.put("Café");
    set.put("Motörhead");

    assert_eq!(set.values(), ["Café", "Motörhead"]);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_repeated_puts_are_idempotent() {
    let mut first = CollatedTextSet::new();
    for value in ["Artist", "ARTIST", "Other", "artist", "other"] {
        first.put(value);
    }

    // permutation that keeps each class's first occurrence in place
    let mut second = CollatedTextSet::new();
    for value in ["Artist", "Other", "ARTIST", "other", "artist"] {
        second.put(value);
    }

    assert_eq!(first.values(), ["Artist", "Other"]);
    assert_eq!(first.values(), second.values());
}
