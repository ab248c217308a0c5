//! PDF text strings: PDFDocEncoding or UTF-16BE with a byte order mark.

use std::sync::LazyLock;

use encoding_rs::UTF_16BE;

use crate::data::PDF_DOC_ENCODING;
use crate::encoder::SimpleEncoder;

const UTF_16BE_BOM: [u8; 2] = [0xfe, 0xff];

static PDF_DOC: LazyLock<SimpleEncoder> = LazyLock::new(|| {
    SimpleEncoder::from_table("PdfDocEncoding", PDF_DOC_ENCODING.iter().copied().collect())
});

/// Decodes a text string such as a `/Title` or an outline entry.
pub fn decode_text_string(s: &[u8]) -> String {
    match s.strip_prefix(&UTF_16BE_BOM) {
        Some(utf16) => UTF_16BE
            .decode_without_bom_handling(utf16)
            .0
            .into_owned(),
        None => PDF_DOC.decode(s),
    }
}

/// Encodes a text string, preferring PDFDocEncoding when it covers `s`.
pub fn encode_text_string(s: &str) -> Vec<u8> {
    if s.chars().all(|c| PDF_DOC.rune_to_charcode(c).is_some()) {
        return PDF_DOC.encode(s);
    }
    UTF_16BE_BOM
        .into_iter()
        .chain(s.encode_utf16().flat_map(u16::to_be_bytes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_doc_round_trip() {
        let bytes = encode_text_string("Caf\u{e9} \u{2022} \u{20ac}");
        assert_eq!(bytes, b"Caf\xe9 \x80 \xa0");
        assert_eq!(decode_text_string(&bytes), "Café • €");
    }

    #[test]
    fn utf16_when_needed() {
        let bytes = encode_text_string("Ω");
        assert_eq!(bytes, vec![0xfe, 0xff, 0x03, 0xa9]);
        assert_eq!(decode_text_string(&bytes), "Ω");
    }

    #[test]
    fn malformed_utf16_is_replaced() {
        assert_eq!(decode_text_string(&[0xfe, 0xff, 0xd8, 0x00]), "\u{FFFD}");
    }
}
