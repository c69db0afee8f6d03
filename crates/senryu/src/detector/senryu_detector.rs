//! SenryuDetector: トークン列から川柳を検出する。
//!
//! 既定の検出器はフィルタなし・重複すべて保持で、分割探索が見つけた候補を
//! そのまま発見順に返す。

use tracing::debug;

use crate::config::DetectorConfig;
use crate::detector::assembler::ResultAssembler;
use crate::detector::filters::{Candidate, CandidateFilter, FilterChain};
use crate::detector::overlap::OverlapPolicy;
use crate::detector::segmentation::find_candidates;
use crate::errors::DetectorError;
use crate::models::{DetectionResult, Token};

/// 川柳検出器
///
/// 状態を持たず、`&self` で何度でも呼び出せる（`Send + Sync`）。
#[derive(Debug, Default)]
pub struct SenryuDetector {
  filters: FilterChain,
  overlap: OverlapPolicy,
}

impl SenryuDetector {
  /// フィルタなし・`OverlapPolicy::KeepAll` の検出器
  pub fn new() -> Self {
    Self::default()
  }

  /// 設定からフィルタと重複ポリシーを組み立てる
  pub fn from_config(config: &DetectorConfig) -> Self {
    Self {
      filters: FilterChain::from_config(&config.filters),
      overlap: config.overlap,
    }
  }

  /// フィルタを追加する
  #[must_use]
  pub fn with_filter<F: CandidateFilter + 'static>(mut self, filter: F) -> Self {
    self.filters.push(filter);
    self
  }

  /// 重複ポリシーを差し替える
  #[must_use]
  pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
    self.overlap = overlap;
    self
  }

  /// 重複ポリシー
  pub fn overlap_policy(&self) -> OverlapPolicy {
    self.overlap
  }

  /// 登録済みフィルタ
  pub fn filters(&self) -> &FilterChain {
    &self.filters
  }

  /// 川柳を検出する。
  ///
  /// 空のトークン列を含め、どの入力に対しても失敗しない。
  /// 結果は開始位置の昇順（同じ開始位置では発見順）。
  pub fn detect(&self, tokens: &[Token]) -> Vec<DetectionResult> {
    if tokens.is_empty() {
      return Vec::new();
    }

    let spans = find_candidates(tokens);
    let assembler = ResultAssembler::new(tokens);
    let total_candidates = spans.len();

    let results: Vec<DetectionResult> = spans
      .iter()
      .filter(|span| self.filters.accepts(&Candidate { span: **span, tokens }))
      .map(|span| assembler.assemble(span))
      .collect();
    let accepted = results.len();

    let results = self.overlap.apply(results);

    debug!(
      tokens = tokens.len(),
      candidates = total_candidates,
      accepted,
      emitted = results.len(),
      overlap = %self.overlap,
      "Senryu detection completed"
    );

    results
  }
}

/// フィルタなし・重複すべて保持で検出する
pub fn detect(tokens: &[Token]) -> Vec<DetectionResult> {
  SenryuDetector::new().detect(tokens)
}

/// トークン列が `text` を隙間・重なりなく順に覆っているかを検証する。
///
/// 位置情報（`start_position` / `end_position`）はこの前提の上で計算される。
///
/// # Errors
/// - 表層形が空のトークンがある場合 `DetectorError::EmptySurface`
/// - 連結結果が `text` と一致しない場合 `DetectorError::TilingMismatch`
pub fn validate_token_stream(tokens: &[Token], text: &str) -> Result<(), DetectorError> {
  let mut offset = 0;
  for (index, token) in tokens.iter().enumerate() {
    let surface = token.surface();
    if surface.is_empty() {
      return Err(DetectorError::EmptySurface { index });
    }
    if !text[offset..].starts_with(surface) {
      return Err(DetectorError::TilingMismatch {
        byte_offset: offset,
      });
    }
    offset += surface.len();
  }

  if offset != text.len() {
    return Err(DetectorError::TilingMismatch {
      byte_offset: offset,
    });
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::FilterConfig;
  use crate::detector::filters::SentenceBoundaryFilter;

  fn word(surface: &str, reading: &str) -> Token {
    Token::new(surface, reading, "名詞")
  }

  fn furuike() -> Vec<Token> {
    vec![
      word("古池", "ふるいけ"),
      Token::new("や", "や", "助詞"),
      word("蛙", "かわず"),
      Token::new("飛び込む", "とびこむ", "動詞"),
      word("水", "みず"),
      Token::new("の", "の", "助詞"),
      word("音", "おと"),
    ]
  }

  #[test]
  fn default_detector_has_no_filters() {
    let detector = SenryuDetector::new();
    assert!(detector.filters().is_empty());
    assert_eq!(detector.overlap_policy(), OverlapPolicy::KeepAll);
  }

  #[test]
  fn detects_furuike() {
    let results = detect(&furuike());
    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r.upper_phrase.text(), "古池や");
    assert_eq!(r.middle_phrase.text(), "蛙飛び込む");
    assert_eq!(r.lower_phrase.text(), "水の音");
    assert_eq!(r.full_reading, "ふるいけやかわずとびこむみずのおと");
    assert_eq!((r.start_position, r.end_position), (0, 11));
  }

  #[test]
  fn empty_stream_yields_nothing() {
    assert!(detect(&[]).is_empty());
  }

  #[test]
  fn configured_filter_removes_candidate() {
    let mut tokens = furuike();
    tokens.insert(2, Token::new("。", "", "補助記号"));
    assert_eq!(detect(&tokens).len(), 1);

    let detector = SenryuDetector::new().with_filter(SentenceBoundaryFilter::default());
    assert!(detector.detect(&tokens).is_empty());

    let config = DetectorConfig {
      filters: FilterConfig::strict(),
      ..DetectorConfig::default()
    };
    assert!(SenryuDetector::from_config(&config).detect(&tokens).is_empty());
  }

  #[test]
  fn validates_tiling_stream() {
    assert!(validate_token_stream(&furuike(), "古池や蛙飛び込む水の音").is_ok());
    assert!(validate_token_stream(&[], "").is_ok());
  }

  #[test]
  fn validation_catches_empty_surface() {
    let tokens = vec![word("古池", "ふるいけ"), word("", "")];
    assert_eq!(
      validate_token_stream(&tokens, "古池"),
      Err(DetectorError::EmptySurface { index: 1 })
    );
  }

  #[test]
  fn validation_catches_gaps_and_trailing_text() {
    let tokens = vec![word("古池", "ふるいけ"), word("蛙", "かわず")];
    assert_eq!(
      validate_token_stream(&tokens, "古池や蛙"),
      Err(DetectorError::TilingMismatch { byte_offset: 6 })
    );
    assert_eq!(
      validate_token_stream(&tokens, "古池蛙です"),
      Err(DetectorError::TilingMismatch { byte_offset: 9 })
    );
  }
}
