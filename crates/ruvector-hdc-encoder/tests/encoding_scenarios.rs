// End-to-end encoding scenarios
// Exercises the n-gram and word/text pipelines through the public API

use rand::rngs::StdRng;
use rand::SeedableRng;
use ruvector_hdc_encoder::hdc::{bind, circular_shift, ItemMemory};
use ruvector_hdc_encoder::{
    Alphabet, EncoderConfig, EncodingScheme, HdEncoder, HdcError, Hypervector,
};
use std::sync::Arc;
use std::thread;

// ========================================================================
// Helper Functions
// ========================================================================

fn bits(s: &str) -> Hypervector {
    Hypervector::from_bits(s.chars().map(|c| c == '1'))
}

fn fixed_encoder(items: &[&str], symbols: &str, ngram: usize) -> HdEncoder {
    let memory = ItemMemory::from_vectors(items.iter().map(|s| bits(s)).collect()).unwrap();
    let config = EncoderConfig::new(memory.dimension())
        .with_nitem(items.len())
        .with_ngram(ngram);
    HdEncoder::from_parts(config, memory, Alphabet::new(symbols.chars()).unwrap()).unwrap()
}

// ========================================================================
// N-gram pipeline
// ========================================================================

#[test]
fn test_aba_two_windows() {
    let encoder = fixed_encoder(&["10110010", "01101001"], "ab", 2);
    let a = encoder.item_memory().get(0).unwrap().clone();
    let b = encoder.item_memory().get(1).unwrap().clone();

    let result = encoder.encode_symbols("aba", false).unwrap();

    let window1 = bind(&b, &circular_shift(&a, 1)).unwrap();
    let window2 = bind(&a, &circular_shift(&b, 1)).unwrap();
    let expected: Vec<u32> = (0..8)
        .map(|i| u32::from(window1.get(i)) + u32::from(window2.get(i)))
        .collect();

    assert_eq!(result.count, 2);
    assert_eq!(result.sum.sums(), expected.as_slice());
}

#[test]
fn test_trigram_window_encodes_order() {
    let encoder = HdEncoder::new(
        EncoderConfig::new(4_096)
            .with_ngram(3)
            .with_sparsity(50, 100)
            .with_seed(5),
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let abc = encoder
        .encode_symbols("abc", false)
        .unwrap()
        .into_hypervector(&mut rng)
        .unwrap();
    let cba = encoder
        .encode_symbols("cba", false)
        .unwrap()
        .into_hypervector(&mut rng)
        .unwrap();
    let longer = encoder.encode_symbols("xabc", false).unwrap();

    assert_eq!(longer.count, 2);
    assert!(abc.similarity(&cba).unwrap().abs() < 0.1);
}

#[test]
fn test_clipped_stream_is_similar_to_dominant_ngram() {
    let encoder = HdEncoder::new(
        EncoderConfig::new(8_192)
            .with_ngram(2)
            .with_sparsity(50, 100)
            .with_seed(9),
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let dominant = encoder
        .encode_symbols("ab", false)
        .unwrap()
        .into_hypervector(&mut rng)
        .unwrap();

    // windows: ab ba ab bx xa ab
    let stream = encoder.encode_symbols("ababxab", true).unwrap();
    assert_eq!(stream.count, 1);

    let clipped = stream.into_hypervector(&mut rng).unwrap();
    assert!(clipped.similarity(&dominant).unwrap() > 0.7);
}

#[test]
fn test_degenerate_stream_returns_zero() {
    let encoder = HdEncoder::new(EncoderConfig::new(512).with_ngram(4)).unwrap();
    let result = encoder.encode_feature_stream(&[1, 2, 3], true).unwrap();

    assert_eq!(result.count, 0);
    assert!(result.sum.is_zero());
}

#[test]
fn test_out_of_range_feature_is_fatal() {
    let encoder = HdEncoder::new(EncoderConfig::new(512).with_nitem(4)).unwrap();

    assert_eq!(
        encoder.encode_feature_stream(&[0, 1, 9], false),
        Err(HdcError::InvalidKey { key: 9, nitem: 4 })
    );
}

// ========================================================================
// Word and text pipeline
// ========================================================================

#[test]
fn test_ab_differs_from_ba() {
    let encoder = fixed_encoder(&["1100", "1010"], "ab", 3);

    let ab = encoder.encode_word("ab").unwrap().vector;
    let ba = encoder.encode_word("ba").unwrap().vector;

    assert_ne!(ab, ba);
}

#[test]
fn test_ab_ab_equals_ab() {
    let encoder = fixed_encoder(&["1100", "1010"], "ab", 3);

    let word = encoder.encode_word("ab").unwrap().vector;
    let text = encoder.encode_text("ab ab").unwrap();

    assert_eq!(text.vector, word);
    assert!(text.diagnostics.is_empty());
}

#[test]
fn test_text_keeps_partial_words() {
    let encoder = HdEncoder::new(EncoderConfig::new(1_024)).unwrap();
    let text = encoder.encode_text("Hello there").unwrap();

    assert_eq!(
        text.diagnostics,
        vec![HdcError::InvalidSymbol {
            symbol: 'H',
            position: 0
        }]
    );
    assert!(!text.vector.is_zero());
}

#[test]
fn test_custom_alphabet_drives_word_keys() {
    let dna = Alphabet::new("acgt".chars()).unwrap();
    let encoder = HdEncoder::new(EncoderConfig::new(2_048).with_nitem(4))
        .unwrap()
        .with_alphabet(dna);

    let gattaca = encoder.encode_text("gattaca").unwrap();
    assert!(gattaca.diagnostics.is_empty());

    let rna = encoder.encode_text("gauuaca").unwrap();
    assert_eq!(rna.diagnostics.len(), 2);
}

#[test]
fn test_shared_encoder_across_threads() {
    let encoder = Arc::new(HdEncoder::new(EncoderConfig::new(2_048)).unwrap());
    let expected = encoder.encode_text("shared memory").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || encoder.encode_text("shared memory").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ========================================================================
// Configuration
// ========================================================================

#[test]
fn test_unknown_encoding_rejected() {
    assert_eq!(
        "ngramSum".parse::<EncodingScheme>(),
        Err(HdcError::UnsupportedEncoding("ngramSum".into()))
    );

    let config: EncoderConfig =
        serde_json::from_str(r#"{"dimension": 256, "encoding": "sumNgramm"}"#).unwrap();
    assert!(HdEncoder::new(config).is_ok());
}
