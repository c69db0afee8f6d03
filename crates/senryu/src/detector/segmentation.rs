//! Segmentation search
//!
//! Three-pointer scan over token boundaries. Phrase boundaries only fall
//! between tokens; a token is never split.
//!
//! For every start index the scan records, per phrase, the first boundary at
//! which the running mora sum reaches each target. A later boundary with the
//! same sum (reached by appending zero-mora tokens) is never taken, so each
//! stage prefers the shortest phrase. Every start index is scanned, so
//! candidates may overlap.

use std::ops::Range;

use crate::models::{MoraPattern, SenryuPattern, Token};
use crate::pattern::{LOWER_TARGETS, MIDDLE_TARGETS, PhraseTargets, UPPER_TARGETS, classify};

/// Token boundaries of an accepted candidate.
///
/// Upper phrase is `start..upper_end`, middle `upper_end..middle_end`, lower `middle_end..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSpan {
  /// Index of the first token
  pub start: usize,
  /// End (exclusive) of the upper phrase
  pub upper_end: usize,
  /// End (exclusive) of the middle phrase
  pub middle_end: usize,
  /// End (exclusive) of the lower phrase and of the whole span
  pub end: usize,
  /// Mora sums of the three phrases
  pub mora: MoraPattern,
  /// Pattern the triple was classified as
  pub pattern: SenryuPattern,
}

impl SplitSpan {
  /// Token range of the upper phrase
  pub fn upper(&self) -> Range<usize> {
    self.start..self.upper_end
  }

  /// Token range of the middle phrase
  pub fn middle(&self) -> Range<usize> {
    self.upper_end..self.middle_end
  }

  /// Token range of the lower phrase
  pub fn lower(&self) -> Range<usize> {
    self.middle_end..self.end
  }

  /// Token range of the whole span
  pub fn tokens(&self) -> Range<usize> {
    self.start..self.end
  }

  /// The three phrase ranges in order
  pub fn phrases(&self) -> [Range<usize>; 3] {
    [self.upper(), self.middle(), self.lower()]
  }
}

/// Boundaries after `from` where the running sum first reaches a target.
///
/// Returns `(end, sum)` pairs in ascending order of `end`. Scanning stops as soon
/// as the running sum exceeds the largest target.
pub fn phrase_ends(tokens: &[Token], from: usize, targets: PhraseTargets) -> Vec<(usize, usize)> {
  let mut ends = Vec::with_capacity(targets.sums().len());
  let mut sum = 0;

  for (offset, token) in tokens.iter().enumerate().skip(from) {
    let previous = sum;
    sum += token.mora_count();
    if sum > targets.max() {
      break;
    }
    if sum != previous && targets.contains(sum) {
      ends.push((offset + 1, sum));
    }
  }

  ends
}

/// Runs the scan over the whole token stream.
///
/// Candidates come out in ascending start order, and for one start in the
/// order upper, then middle, then lower ends were discovered.
pub fn find_candidates(tokens: &[Token]) -> Vec<SplitSpan> {
  let mut spans = Vec::new();

  for start in 0..tokens.len() {
    for (upper_end, upper) in phrase_ends(tokens, start, UPPER_TARGETS) {
      for (middle_end, middle) in phrase_ends(tokens, upper_end, MIDDLE_TARGETS) {
        for (end, lower) in phrase_ends(tokens, middle_end, LOWER_TARGETS) {
          let mora = MoraPattern::new(upper, middle, lower);
          if let Some(pattern) = classify(mora) {
            spans.push(SplitSpan {
              start,
              upper_end,
              middle_end,
              end,
              mora,
              pattern,
            });
          }
        }
      }
    }
  }

  spans
}
