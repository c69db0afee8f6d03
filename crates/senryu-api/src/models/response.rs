//! Response Model Definition

use serde::Serialize;

use senryu::models::{DetectionResult, Phrase, SenryuPattern, Token};

/// Senryu Detection Response
#[derive(Debug, Clone, Serialize)]
pub struct DetectResponse {
  /// Always `true`; failures are returned as an error body instead
  pub success: bool,
  /// The text as received
  pub text: String,
  /// Detected verses
  pub results: Vec<DetectionDto>,
  /// Number of entries in `results`
  pub count: usize,
  /// Elapsed time (milliseconds).
  ///
  /// Omitted for the items of a batch response, which only carries the total.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub elapsed_ms: Option<u64>,
}

impl DetectResponse {
  /// Builds a response, dropping invalid results when `only_valid` is set
  #[must_use]
  pub fn new(
    text: String,
    results: &[DetectionResult],
    only_valid: bool,
    details: bool,
    elapsed_ms: Option<u64>,
  ) -> Self {
    let results: Vec<DetectionDto> = results
      .iter()
      .filter(|r| !only_valid || r.is_valid)
      .map(|r| DetectionDto::from_result(r, details))
      .collect();

    Self {
      success: true,
      text,
      count: results.len(),
      results,
      elapsed_ms,
    }
  }
}

/// Batch Detection Response
#[derive(Debug, Clone, Serialize)]
pub struct BatchDetectResponse {
  /// Always `true`
  pub success: bool,
  /// One response per input text, in input order
  pub results: Vec<DetectResponse>,
  /// Sum of `count` over `results`
  pub total_count: usize,
  /// Elapsed time for the whole batch (milliseconds)
  pub elapsed_ms: u64,
}

impl BatchDetectResponse {
  /// Builds a batch response and sums the per-text counts
  #[must_use]
  pub fn new(results: Vec<DetectResponse>, elapsed_ms: u64) -> Self {
    Self {
      success: true,
      total_count: results.iter().map(|r| r.count).sum(),
      results,
      elapsed_ms,
    }
  }
}

/// One detected verse (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct DetectionDto {
  /// Pattern label such as "5-7-5"
  pub pattern: SenryuPattern,
  /// `[upper, middle, lower]` morae
  pub mora_pattern: [usize; 3],
  /// 上の句
  #[serde(skip_serializing_if = "Option::is_none")]
  pub upper_phrase: Option<PhraseDto>,
  /// 中の句
  #[serde(skip_serializing_if = "Option::is_none")]
  pub middle_phrase: Option<PhraseDto>,
  /// 下の句
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lower_phrase: Option<PhraseDto>,
  /// Start character offset (inclusive)
  pub start_position: usize,
  /// End character offset (exclusive)
  pub end_position: usize,
  /// Matched text
  pub text: String,
  /// Readings of the three phrases concatenated
  pub full_reading: String,
  /// Validity flag
  pub is_valid: bool,
  /// `true` only for 5-7-5
  pub is_standard: bool,
}

impl DetectionDto {
  /// Converts a detection result; phrases are kept only when `details` is set
  #[must_use]
  pub fn from_result(result: &DetectionResult, details: bool) -> Self {
    let phrase = |p: &Phrase| details.then(|| PhraseDto::from(p));

    Self {
      pattern: result.pattern,
      mora_pattern: result.mora_pattern.as_array(),
      upper_phrase: phrase(&result.upper_phrase),
      middle_phrase: phrase(&result.middle_phrase),
      lower_phrase: phrase(&result.lower_phrase),
      start_position: result.start_position,
      end_position: result.end_position,
      text: result.text.clone(),
      full_reading: result.full_reading.clone(),
      is_valid: result.is_valid,
      is_standard: result.is_standard,
    }
  }
}

/// Phrase (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct PhraseDto {
  /// Concatenated surfaces
  pub text: String,
  /// Concatenated readings
  pub reading: String,
  /// Morae
  pub mora_count: usize,
  /// Tokens of the phrase
  pub tokens: Vec<TokenDto>,
}

impl From<&Phrase> for PhraseDto {
  fn from(phrase: &Phrase) -> Self {
    Self {
      text: phrase.text().to_string(),
      reading: phrase.reading().to_string(),
      mora_count: phrase.mora_count(),
      tokens: phrase.tokens().iter().map(TokenDto::from).collect(),
    }
  }
}

/// Token Information (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct TokenDto {
  /// Surface form (string appearing in original text)
  pub surface: String,
  /// Kana reading
  pub reading: String,
  /// Morae of the reading
  pub mora_count: usize,
  /// Part of Speech
  pub pos: String,
}

impl From<&Token> for TokenDto {
  fn from(token: &Token) -> Self {
    Self {
      surface: token.surface().to_string(),
      reading: token.reading().to_string(),
      mora_count: token.mora_count(),
      pos: token.pos().to_string(),
    }
  }
}

/// GET /health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  /// "healthy"
  pub status: &'static str,
  /// Human readable status
  pub message: &'static str,
  /// Crate version
  pub version: &'static str,
}

/// GET / response
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
  /// Service name
  pub message: &'static str,
  /// Crate version
  pub version: &'static str,
  /// Available endpoints
  pub endpoints: Vec<&'static str>,
}

/// GET /examples response
///
/// `examples[i]` is described by `descriptions[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct ExamplesResponse {
  /// Example verses
  pub examples: Vec<&'static str>,
  /// One description per example
  pub descriptions: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_result() -> DetectionResult {
    let tokens = [
      Token::new("古池", "ふるいけ", "名詞"),
      Token::new("や", "や", "助詞"),
      Token::new("蛙", "かわず", "名詞"),
      Token::new("飛び込む", "とびこむ", "動詞"),
      Token::new("水", "みず", "名詞"),
      Token::new("の", "の", "助詞"),
      Token::new("音", "おと", "名詞"),
    ];
    senryu::detect(&tokens).remove(0)
  }

  #[test]
  fn detection_dto_with_details() {
    let dto = DetectionDto::from_result(&sample_result(), true);
    assert_eq!(dto.mora_pattern, [5, 7, 5]);
    assert_eq!(dto.text, "古池や蛙飛び込む水の音");
    let upper = dto.upper_phrase.unwrap();
    assert_eq!(upper.text, "古池や");
    assert_eq!(upper.tokens.len(), 2);
    assert_eq!(upper.tokens[0].mora_count, 4);
  }

  #[test]
  fn detection_dto_without_details_omits_phrases() {
    let dto = DetectionDto::from_result(&sample_result(), false);
    let json = serde_json::to_value(&dto).unwrap();
    assert!(json.get("upper_phrase").is_none());
    assert!(json.get("lower_phrase").is_none());
    assert_eq!(json["pattern"], "5-7-5");
    assert_eq!(json["is_standard"], true);
    assert_eq!(json["end_position"], 11);
  }

  #[test]
  fn detect_response_counts_results() {
    let results = vec![sample_result()];
    let response = DetectResponse::new("x".to_string(), &results, false, true, Some(3));
    assert!(response.success);
    assert_eq!(response.count, 1);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"elapsed_ms\":3"));
  }

  #[test]
  fn only_valid_drops_invalid_results() {
    let mut invalid = sample_result();
    invalid.is_valid = false;
    let response = DetectResponse::new("x".to_string(), &[invalid], true, true, None);
    assert_eq!(response.count, 0);
    assert!(response.results.is_empty());
  }

  #[test]
  fn batch_response_sums_counts() {
    let results = vec![sample_result()];
    let items = vec![
      DetectResponse::new("a".to_string(), &results, false, false, None),
      DetectResponse::new("b".to_string(), &[], false, false, None),
    ];
    let batch = BatchDetectResponse::new(items, 7);
    assert_eq!(batch.total_count, 1);

    let json = serde_json::to_value(&batch).unwrap();
    assert!(json["results"][0].get("elapsed_ms").is_none());
    assert_eq!(json["elapsed_ms"], 7);
  }
}
