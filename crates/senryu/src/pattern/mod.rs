//! pattern モジュール
pub mod pattern_matcher;

/// 再エクスポート
pub use pattern_matcher::{
  ACCEPTED_PATTERNS, LOWER_TARGETS, MIDDLE_TARGETS, PhraseTargets, UPPER_TARGETS, classify,
  is_accepted,
};
