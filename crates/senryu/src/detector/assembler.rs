//! Detection result assembler
//!
//! Turns an accepted [`SplitSpan`] into a [`DetectionResult`]. Character offsets
//! come from prefix sums of the surface lengths, so the token stream has to tile
//! the text.

use crate::detector::segmentation::SplitSpan;
use crate::models::{DetectionResult, Phrase, Token};

/// Builds results for one token stream.
#[derive(Debug, Clone)]
pub struct ResultAssembler<'a> {
  tokens: &'a [Token],

  /// Concatenated surfaces, i.e. the analyzed text
  text: String,

  /// `offsets[i]` = character offset where token `i` starts; `offsets[n]` = text length
  offsets: Vec<usize>,
}

impl<'a> ResultAssembler<'a> {
  /// Precomputes the text and character offsets for `tokens`.
  pub fn new(tokens: &'a [Token]) -> Self {
    let mut offsets = Vec::with_capacity(tokens.len() + 1);
    let mut position = 0;
    offsets.push(position);
    for token in tokens {
      position += token.char_len();
      offsets.push(position);
    }

    Self {
      tokens,
      text: tokens.iter().map(Token::surface).collect(),
      offsets,
    }
  }

  /// The analyzed text
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Character offset of the boundary before token `index`
  pub fn char_offset(&self, index: usize) -> usize {
    self.offsets[index]
  }

  /// Assembles the result for an accepted span.
  pub fn assemble(&self, span: &SplitSpan) -> DetectionResult {
    let upper_phrase = Phrase::from_tokens(&self.tokens[span.upper()]);
    let middle_phrase = Phrase::from_tokens(&self.tokens[span.middle()]);
    let lower_phrase = Phrase::from_tokens(&self.tokens[span.lower()]);

    let full_reading =
      [upper_phrase.reading(), middle_phrase.reading(), lower_phrase.reading()].concat();
    let text =
      [upper_phrase.text(), middle_phrase.text(), lower_phrase.text()].concat();

    DetectionResult {
      pattern: span.pattern,
      upper_phrase,
      middle_phrase,
      lower_phrase,
      start_position: self.offsets[span.start],
      end_position: self.offsets[span.end],
      original_text: self.text.clone(),
      text,
      mora_pattern: span.mora,
      full_reading,
      is_valid: true,
      is_standard: span.pattern.is_standard(),
    }
  }
}
