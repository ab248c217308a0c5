mod encodings;
mod glyphnames;
mod zapfglyphnames;

pub(crate) use encodings::*;
pub(crate) use glyphnames::{GLYPH_NAMES, GLYPH_RUNES};
pub(crate) use zapfglyphnames::ZAPF_DINGBATS_NAMES;

/// Looks up the static code to rune table of a predefined encoding.
pub(crate) fn base_table(name: &str) -> Option<&'static [(u8, char)]> {
    match name {
        "StandardEncoding" => Some(STANDARD_ENCODING),
        "MacRomanEncoding" => Some(MAC_ROMAN_ENCODING),
        "MacExpertEncoding" => Some(MAC_EXPERT_ENCODING),
        "PdfDocEncoding" => Some(PDF_DOC_ENCODING),
        _ => None,
    }
}
