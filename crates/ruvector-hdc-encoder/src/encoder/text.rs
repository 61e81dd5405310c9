//! Text encoding: OR-bundle of word vectors

use super::HdEncoder;
use crate::error::{HdcError, Result};
use crate::hdc::Hypervector;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Hypervector of a whole text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEncoding {
    pub vector: Hypervector,
    /// Number of whitespace-separated words bundled
    pub words: usize,
    /// `InvalidSymbol` diagnostics collected from every word
    pub diagnostics: Vec<HdcError>,
}

impl HdEncoder {
    /// Encodes whitespace-separated words and ORs their vectors together
    ///
    /// The result records which word patterns occur anywhere in the text; it
    /// ignores word order and repetition. Empty or all-whitespace text gives
    /// the zero vector.
    #[instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn encode_text(&self, text: &str) -> Result<TextEncoding> {
        let mut vector = Hypervector::zero(self.config.dimension);
        let mut diagnostics = Vec::new();
        let mut words = 0;

        for word in text.split_whitespace() {
            let encoded = self.encode_word(word)?;
            vector.bundle_or_assign(&encoded.vector)?;
            diagnostics.extend(encoded.diagnostics);
            words += 1;
        }

        debug!(
            words,
            skipped = diagnostics.len(),
            popcount = vector.popcount(),
            "encoded text"
        );
        Ok(TextEncoding {
            vector,
            words,
            diagnostics,
        })
    }

    /// Encodes independent texts in parallel, preserving input order
    pub fn encode_texts<S>(&self, texts: &[S]) -> Result<Vec<TextEncoding>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.encode_text(text.as_ref()))
            .collect()
    }
}
