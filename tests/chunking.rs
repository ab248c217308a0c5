use pdf_textencoding::{
    Differences, SimpleEncoder, TransformStatus, Transformer, transform_to_end,
};
use proptest::prelude::*;
use proptest::sample::Index;

const ENCODINGS: &[&str] = &[
    "StandardEncoding",
    "MacRomanEncoding",
    "MacExpertEncoding",
    "PdfDocEncoding",
    "WinAnsiEncoding",
];

fn encoding(name: &str) -> SimpleEncoder {
    SimpleEncoder::new_named(name, &Differences::new()).unwrap()
}

fn split<'a>(input: &'a [u8], cuts: &[Index]) -> Vec<&'a [u8]> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c.index(input.len() + 1)).collect();
    points.push(0);
    points.push(input.len());
    points.sort_unstable();
    points.dedup();
    let mut chunks: Vec<&[u8]> = points.windows(2).map(|w| &input[w[0]..w[1]]).collect();
    if chunks.is_empty() {
        chunks.push(&input[..0]);
    }
    chunks
}

/// Feeds `chunks` one after another through a destination of `dst_size`
/// bytes, honouring the short-buffer signals.
fn drive<T: Transformer>(transformer: &mut T, chunks: &[&[u8]], dst_size: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut pending = Vec::new();
    let mut dst = vec![0u8; dst_size];
    for (i, chunk) in chunks.iter().enumerate() {
        let at_eof = i + 1 == chunks.len();
        pending.extend_from_slice(chunk);
        loop {
            let step = transformer.transform(&mut dst, &pending, at_eof);
            out.extend_from_slice(&dst[..step.written]);
            pending.drain(..step.consumed);
            match step.status {
                TransformStatus::ShortDestination => {
                    assert!(step.consumed > 0 || step.written > 0, "no progress");
                }
                TransformStatus::ShortSource => {
                    assert!(!at_eof, "short source at end of input");
                    break;
                }
                TransformStatus::Done => {
                    assert!(pending.is_empty());
                    break;
                }
            }
        }
    }
    assert!(pending.is_empty());
    out
}

proptest! {
    #[test]
    fn decode_is_chunking_invariant(
        name in prop::sample::select(ENCODINGS),
        input in prop::collection::vec(any::<u8>(), 0..256),
        cuts in prop::collection::vec(any::<Index>(), 0..8),
        dst_size in 3usize..16,
    ) {
        let enc = encoding(name);
        let whole = transform_to_end(&mut enc.decoder(), &input);
        let chunked = drive(&mut enc.decoder(), &split(&input, &cuts), dst_size);
        prop_assert_eq!(&chunked, &whole);
        prop_assert!(std::str::from_utf8(&whole).is_ok());
        prop_assert_eq!(String::from_utf8_lossy(&whole).chars().count(), input.len());
    }

    #[test]
    fn encode_text_is_chunking_invariant(
        name in prop::sample::select(ENCODINGS),
        text in "\\PC{0,64}",
        cuts in prop::collection::vec(any::<Index>(), 0..8),
        dst_size in 1usize..16,
    ) {
        let enc = encoding(name);
        let input = text.as_bytes();
        let whole = transform_to_end(&mut enc.encoder(), input);
        let chunked = drive(&mut enc.encoder(), &split(input, &cuts), dst_size);
        prop_assert_eq!(&chunked, &whole);
        prop_assert_eq!(whole.len(), text.chars().count());
    }

    #[test]
    fn encode_raw_bytes_is_chunking_invariant(
        name in prop::sample::select(ENCODINGS),
        input in prop::collection::vec(any::<u8>(), 0..128),
        cuts in prop::collection::vec(any::<Index>(), 0..8),
        dst_size in 1usize..16,
    ) {
        let enc = encoding(name);
        let whole = transform_to_end(&mut enc.encoder(), &input);
        let chunked = drive(&mut enc.encoder(), &split(&input, &cuts), dst_size);
        prop_assert_eq!(chunked, whole);
    }

    #[test]
    fn mapped_runes_round_trip(
        name in prop::sample::select(ENCODINGS),
        input in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        let enc = encoding(name);
        let mapped: Vec<u8> = input
            .into_iter()
            .filter(|&b| enc.charcode_to_rune(u32::from(b)).is_some())
            .collect();
        let text = enc.decode(&mapped);
        let back = enc.decode(&enc.encode(&text));
        prop_assert_eq!(back, text);
    }
}
