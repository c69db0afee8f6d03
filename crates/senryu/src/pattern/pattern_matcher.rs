//! Pattern matcher
//!
//! Decides whether a mora triple is one of the accepted verse shapes, and
//! provides the per-phrase bounds the segmentation search prunes with.
//!
//! A triple within every bound is not necessarily accepted, e.g. `(6, 8, 5)`.

use crate::models::{MoraPattern, SenryuPattern};

/// The closed set of accepted triples.
pub const ACCEPTED_PATTERNS: [(MoraPattern, SenryuPattern); 4] = [
  (SenryuPattern::Standard.mora_pattern(), SenryuPattern::Standard),
  (SenryuPattern::JiamariMiddle.mora_pattern(), SenryuPattern::JiamariMiddle),
  (SenryuPattern::JiamariUpper.mora_pattern(), SenryuPattern::JiamariUpper),
  (SenryuPattern::JiamariLower.mora_pattern(), SenryuPattern::JiamariLower),
];

/// Mora sums a phrase may end on, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseTargets {
  sums: &'static [usize],
}

impl PhraseTargets {
  /// `sums` must be non-empty and ascending.
  pub const fn new(sums: &'static [usize]) -> Self {
    Self { sums }
  }

  /// Target sums
  pub const fn sums(&self) -> &'static [usize] {
    self.sums
  }

  /// `true` when `sum` is one of the targets
  pub fn contains(&self, sum: usize) -> bool {
    self.sums.contains(&sum)
  }

  /// Largest target; the search stops once a running sum exceeds it
  pub fn max(&self) -> usize {
    self.sums.last().copied().unwrap_or(0)
  }
}

/// 上の句: 5 or 6
pub const UPPER_TARGETS: PhraseTargets = PhraseTargets::new(&[5, 6]);

/// 中の句: 7 or 8
pub const MIDDLE_TARGETS: PhraseTargets = PhraseTargets::new(&[7, 8]);

/// 下の句: 5
pub const LOWER_TARGETS: PhraseTargets = PhraseTargets::new(&[5]);

/// Returns the pattern for an exact member of the accepted set.
pub fn classify(mora: MoraPattern) -> Option<SenryuPattern> {
  ACCEPTED_PATTERNS.iter().find(|(triple, _)| *triple == mora).map(|(_, pattern)| *pattern)
}

/// `true` when [`classify`] would accept the triple
pub fn is_accepted(mora: MoraPattern) -> bool {
  classify(mora).is_some()
}
