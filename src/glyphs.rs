//! Glyph name to Unicode lookups.

use crate::data::{GLYPH_NAMES, GLYPH_RUNES, ZAPF_DINGBATS_NAMES};

/// Stand-in rune for "no character".
///
/// Unmapped codes decode to it, and a code mapped to it (through the
/// `.notdef` glyph) becomes the fallback when encoding unmapped runes.
pub const MISSING_CODE_RUNE: char = '\u{FFFD}';

/// Resolves a glyph name to the rune it represents.
///
/// The Adobe Glyph List is searched first, then the ZapfDingbats names,
/// then the `uniXXXX` and `uXXXX[XX]` forms.
pub fn glyph_to_rune(glyph: &str) -> Option<char> {
    if let Some(rune) = search(GLYPH_NAMES, glyph).or_else(|| search(ZAPF_DINGBATS_NAMES, glyph)) {
        return Some(rune);
    }
    if let Some(hex) = glyph.strip_prefix("uni") {
        if hex.len() == 4 {
            return parse_scalar(hex);
        }
        return None;
    }
    if let Some(hex) = glyph.strip_prefix('u') {
        if (4..=6).contains(&hex.len()) {
            return parse_scalar(hex);
        }
    }
    None
}

/// Resolves a rune to its name in the glyph list.
pub fn rune_to_glyph(rune: char) -> Option<&'static str> {
    GLYPH_RUNES
        .binary_search_by_key(&rune, |&(r, _)| r)
        .ok()
        .map(|i| GLYPH_RUNES[i].1)
}

fn search(table: &[(&str, char)], glyph: &str) -> Option<char> {
    table
        .binary_search_by_key(&glyph, |&(n, _)| n)
        .ok()
        .map(|i| table[i].1)
}

fn parse_scalar(hex: &str) -> Option<char> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(GLYPH_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(ZAPF_DINGBATS_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(GLYPH_RUNES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn named_glyphs() {
        assert_eq!(glyph_to_rune("quoteright"), Some('\u{2019}'));
        assert_eq!(glyph_to_rune("Adieresis"), Some('Ä'));
        assert_eq!(rune_to_glyph('Å'), Some("Aring"));
        assert_eq!(rune_to_glyph('\u{0020}'), Some("space"));
    }

    #[test]
    fn full_glyph_list() {
        assert_eq!(glyph_to_rune("Omega"), Some('\u{2126}'));
        assert_eq!(glyph_to_rune("alpha"), Some('α'));
        assert_eq!(glyph_to_rune("club"), Some('♣'));
        assert_eq!(glyph_to_rune("union"), Some('∪'));
        assert_eq!(glyph_to_rune("afii10017"), Some('А'));
        assert_eq!(rune_to_glyph('α'), Some("alpha"));
    }

    #[test]
    fn zapf_dingbats_names() {
        assert_eq!(ZAPF_DINGBATS_NAMES.len(), 202);
        assert_eq!(glyph_to_rune("a1"), Some('\u{2701}'));
        assert_eq!(glyph_to_rune("a71"), Some('●'));
        assert_eq!(glyph_to_rune("a191"), Some('\u{27BE}'));
        assert_eq!(glyph_to_rune("a80"), None);
        assert_eq!(rune_to_glyph('\u{2701}'), Some("a1"));
    }

    #[test]
    fn every_rune_names_itself() {
        for &(rune, name) in GLYPH_RUNES {
            assert_eq!(glyph_to_rune(name), Some(rune), "{name}");
        }
    }

    #[test]
    fn notdef_is_the_missing_rune() {
        assert_eq!(glyph_to_rune(".notdef"), Some(MISSING_CODE_RUNE));
        assert_eq!(rune_to_glyph(MISSING_CODE_RUNE), Some(".notdef"));
    }

    #[test]
    fn uni_forms() {
        assert_eq!(glyph_to_rune("uni20AC"), Some('€'));
        assert_eq!(glyph_to_rune("u1F600"), Some('\u{1F600}'));
        assert_eq!(glyph_to_rune("uniD800"), None);
        assert_eq!(glyph_to_rune("uni20A"), None);
        assert_eq!(glyph_to_rune("u+20AC"), None);
        assert_eq!(glyph_to_rune("unknownglyph"), None);
    }

    #[test]
    fn unknown_rune_has_no_glyph() {
        assert_eq!(rune_to_glyph('\u{1F600}'), None);
    }
}
