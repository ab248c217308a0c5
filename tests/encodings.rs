use lopdf::{Dictionary, Document, Object};
use pdf_textencoding::{
    Differences, EncodingError, SimpleEncoder, TransformStatus, Transformer, registry,
    transform_to_end,
};

const BASE_ENCODINGS: &[(&str, usize)] = &[
    ("StandardEncoding", 149),
    ("MacRomanEncoding", 255),
    ("MacExpertEncoding", 165),
    ("PdfDocEncoding", 252),
];

fn named(name: &str) -> SimpleEncoder {
    SimpleEncoder::new_named(name, &Differences::new()).unwrap()
}

#[test_log::test]
fn base_tables_have_expected_sizes() {
    for &(name, len) in BASE_ENCODINGS {
        let enc = named(name);
        assert_eq!(enc.charcodes().len(), len, "{name}");
        assert_eq!(enc.base_name(), name);
    }
}

#[test_log::test]
fn charcodes_are_sorted_key_set() {
    for &(name, _) in BASE_ENCODINGS {
        let enc = named(name);
        let codes = enc.charcodes();
        assert!(codes.windows(2).all(|w| w[0] < w[1]), "{name}");
        for code in 0..=0xffu32 {
            assert_eq!(
                codes.binary_search(&code).is_ok(),
                enc.charcode_to_rune(code).is_some(),
                "{name} {code:#04x}"
            );
        }
    }
}

#[test_log::test]
fn reverse_lookup_round_trips() {
    for name in BASE_ENCODINGS
        .iter()
        .map(|&(name, _)| name)
        .chain(["WinAnsiEncoding"])
    {
        let enc = named(name);
        for code in enc.charcodes() {
            let rune = enc.charcode_to_rune(code).unwrap();
            let back = enc.rune_to_charcode(rune).unwrap();
            assert_eq!(enc.charcode_to_rune(back), Some(rune), "{name} {code:#04x}");
        }
    }
}

#[test_log::test]
fn every_builtin_code_has_a_glyph_name() {
    for &(name, _) in BASE_ENCODINGS {
        let enc = named(name);
        for code in enc.charcodes() {
            let glyph = enc.charcode_to_glyph(code).unwrap();
            assert_eq!(enc.charcode_to_rune(code), pdf_textencoding::glyph_to_rune(glyph));
        }
    }
}

#[test_log::test]
fn literal_table_values() {
    let mac = named("MacRomanEncoding");
    assert_eq!(mac.charcode_to_rune(0x80), Some('\u{00C4}'));

    let std = named("StandardEncoding");
    assert_eq!(std.charcode_to_rune(0x27), Some('\u{2019}'));
    assert_eq!(std.charcode_to_rune(0x01), None);
    assert_eq!(std.charcode_to_rune(0x20), Some(' '));

    let expert = named("MacExpertEncoding");
    assert_eq!(expert.charcode_to_glyph(0x57), Some("fi"));

    let doc = named("PdfDocEncoding");
    assert_eq!(doc.charcode_to_rune(0x18), Some('\u{02D8}'));
    assert_eq!(doc.charcode_to_rune(0x7f), None);
}

#[test_log::test]
fn construction_errors() {
    assert!(matches!(
        SimpleEncoder::new_custom(&Differences::new(), &Differences::new()),
        Err(EncodingError::EmptyEncoding)
    ));
    assert!(matches!(
        SimpleEncoder::new_named("Bogus", &Differences::new()),
        Err(EncodingError::UnsupportedEncoding(_))
    ));
}

#[test_log::test]
fn decode_into_small_destination() {
    let enc = named("MacRomanEncoding");
    let src = [0x80, 0x81];
    let mut dec = enc.decoder();

    let mut dst = [0u8; 1];
    let step = dec.transform(&mut dst, &src, true);
    assert_eq!(step.status, TransformStatus::ShortDestination);
    assert_eq!((step.consumed, step.written), (0, 0));

    let mut dst = [0u8; 2];
    let step = dec.transform(&mut dst, &src, true);
    assert_eq!(step.status, TransformStatus::ShortDestination);
    assert_eq!((step.consumed, step.written), (1, 2));
    assert_eq!(&dst, "Ä".as_bytes());

    let mut rest = [0u8; 2];
    let step = dec.transform(&mut rest, &src[1..], true);
    assert_eq!(step.status, TransformStatus::Done);
    assert_eq!(&rest, "Å".as_bytes());
}

#[test_log::test]
fn overlay_isolation() {
    let base = named("MacRomanEncoding");
    let before: Vec<_> = (0..=0xffu32).map(|c| base.charcode_to_rune(c)).collect();
    let diffs: Differences = (0x80..0x90).map(|c| (c, "bullet".to_string())).collect();
    let derived = base.apply_differences(&diffs);

    let after: Vec<_> = (0..=0xffu32).map(|c| base.charcode_to_rune(c)).collect();
    assert_eq!(before, after);
    assert_eq!(base.rune_to_charcode('Ä'), Some(0x80));
    assert_eq!(derived.rune_to_charcode('Ä'), None);
    assert_eq!(derived.rune_to_charcode('•'), Some(0x80));
}

fn test_symbols() -> SimpleEncoder {
    SimpleEncoder::from_table(
        "TestSymbolEncoding",
        [(0x41, '\u{2660}'), (0x42, '\u{2665}')].into_iter().collect(),
    )
}

#[test_log::test]
fn registered_encodings_take_precedence() {
    registry::register("TestSymbolEncoding", test_symbols);
    let enc = SimpleEncoder::new_named(
        "TestSymbolEncoding",
        &Differences::from([(0x43, "club".to_string())]),
    )
    .unwrap();
    assert_eq!(enc.base_name(), "TestSymbolEncoding");
    assert_eq!(enc.decode(b"ABC"), "\u{2660}\u{2665}\u{2663}");
    assert_eq!(enc.glyph_to_charcode("club"), Some(0x43));
}

#[test_log::test]
fn differences_resolve_through_the_glyph_list() {
    let diffs = Differences::from([
        (0x41, "Omega".to_string()),
        (0x42, "alpha".to_string()),
        (0x43, "afii10017".to_string()),
        (0x44, "a1".to_string()),
        (0x45, "union".to_string()),
        (0x46, "uni263A".to_string()),
    ]);
    let enc = SimpleEncoder::new_named("StandardEncoding", &diffs).unwrap();
    assert_eq!(enc.decode(b"ABCDEF"), "\u{2126}\u{03B1}\u{0410}\u{2701}\u{222A}\u{263A}");
    assert_eq!(enc.encode("\u{03B1}\u{222A}"), b"BE");
    assert_eq!(enc.rune_to_charcode('A'), None);
}

#[test]
fn encoders_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SimpleEncoder>();

    let enc = named("MacRomanEncoding");
    let input: Vec<u8> = (0x20..=0xffu8).collect();
    let expected = enc.decode(&input);
    std::thread::scope(|s| {
        let mut workers = Vec::new();
        for _ in 0..4 {
            workers.push(s.spawn(|| {
                let mut dec = enc.decoder();
                (0..50)
                    .map(|_| transform_to_end(&mut dec, &input))
                    .collect::<Vec<_>>()
            }));
        }
        for worker in workers {
            for out in worker.join().unwrap() {
                assert_eq!(out, expected.as_bytes());
            }
        }
    });
}

#[test_log::test]
fn serialization_round_trip() {
    let mut doc = Document::with_version("1.5");
    let enc = named("WinAnsiEncoding")
        .apply_differences(&Differences::from([(0x80, "bullet".to_string())]));

    let encoding = enc.to_pdf_object(&mut doc);
    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("Encoding", encoding);
    let font_id = doc.add_object(font);

    let font = doc.get_object(font_id).unwrap().as_dict().unwrap();
    let parsed = SimpleEncoder::from_pdf_object(&doc, font.get(b"Encoding").unwrap()).unwrap();
    assert_eq!(parsed, enc);
    assert_eq!(parsed.decode(&[0x80, 0x41]), "•A");
}
