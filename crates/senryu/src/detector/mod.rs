//! detector モジュール
//!
//! 分割探索 → フィルタ → 結果組み立て → 重複整理の順に処理する。
pub mod assembler;
pub mod filters;
pub mod overlap;
pub mod segmentation;
pub mod senryu_detector;

/// 再エクスポート
pub use assembler::ResultAssembler;
pub use filters::{
  Candidate, CandidateFilter, FilterChain, PhraseStartFilter, SentenceBoundaryFilter,
  SokuonEndingFilter, UnknownWordFilter,
};
pub use overlap::OverlapPolicy;
pub use segmentation::{SplitSpan, find_candidates, phrase_ends};
pub use senryu_detector::{SenryuDetector, detect, validate_token_stream};
