//! tokenizer モジュール
pub mod vibrato_tokenizer;

/// 再エクスポート
pub use vibrato_tokenizer::{FeatureLayout, MorphologicalAnalyzer, VibratoAnalyzer, token_from_feature};
