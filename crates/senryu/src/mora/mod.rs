//! mora モジュール
pub mod mora_counter;

/// 再エクスポート
pub use mora_counter::{
  count_mora, is_kana, is_kana_reading, is_long_vowel_mark, is_non_counting_kana, is_sokuon,
  normalize_reading,
};
