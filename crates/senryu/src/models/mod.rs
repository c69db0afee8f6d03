//! models モジュール
pub mod model_definition;

/// 再エクスポート
pub use model_definition::{DetectionResult, MoraPattern, Phrase, SYMBOL_POS, SenryuPattern, Token};
