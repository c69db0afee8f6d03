//! Data Model Definition
use serde::Serialize;
use std::fmt;

use crate::mora::count_mora;

/// Part-of-speech labels for symbols, punctuation and whitespace (IPADIC and UniDic).
pub const SYMBOL_POS: [&str; 3] = ["補助記号", "記号", "空白"];

/// One morpheme produced by the analyzer.
///
/// The mora count is derived from the reading when the token is built and the
/// token cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
  /// Surface form as it appears in the text
  surface: String,

  /// Kana reading; empty for symbols and punctuation
  reading: String,

  /// Morae of `reading`
  mora_count: usize,

  /// Part-of-speech label, opaque to the detector
  pos: String,
}

impl Token {
  /// Constructor for Token
  pub fn new(surface: impl Into<String>, reading: impl Into<String>, pos: impl Into<String>) -> Self {
    let reading = reading.into();
    let mora_count = count_mora(&reading);
    Self {
      surface: surface.into(),
      reading,
      mora_count,
      pos: pos.into(),
    }
  }

  /// Surface form
  pub fn surface(&self) -> &str {
    &self.surface
  }

  /// Reading
  pub fn reading(&self) -> &str {
    &self.reading
  }

  /// Mora count of the reading
  pub fn mora_count(&self) -> usize {
    self.mora_count
  }

  /// Part of speech
  pub fn pos(&self) -> &str {
    &self.pos
  }

  /// `true` when the part of speech is one of [`SYMBOL_POS`]
  pub fn is_symbol(&self) -> bool {
    SYMBOL_POS.contains(&self.pos.as_str())
  }

  /// Length of the surface in characters (not bytes)
  pub fn char_len(&self) -> usize {
    self.surface.chars().count()
  }
}

/// A contiguous, non-empty run of tokens forming one line of a verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
  text: String,
  reading: String,
  mora_count: usize,
  tokens: Vec<Token>,
}

impl Phrase {
  /// Builds a phrase by concatenating surfaces and readings and summing morae.
  ///
  /// # Panics
  /// Panics if `tokens` is empty. The segmentation search never builds an empty phrase.
  pub fn from_tokens(tokens: &[Token]) -> Self {
    assert!(!tokens.is_empty(), "a phrase needs at least one token");

    Self {
      text: tokens.iter().map(Token::surface).collect(),
      reading: tokens.iter().map(Token::reading).collect(),
      mora_count: tokens.iter().map(Token::mora_count).sum(),
      tokens: tokens.to_vec(),
    }
  }

  /// Concatenated surfaces
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Concatenated readings
  pub fn reading(&self) -> &str {
    &self.reading
  }

  /// Sum of token morae
  pub fn mora_count(&self) -> usize {
    self.mora_count
  }

  /// Tokens in order
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  /// First token
  pub fn first_token(&self) -> &Token {
    &self.tokens[0]
  }

  /// Last token
  pub fn last_token(&self) -> &Token {
    &self.tokens[self.tokens.len() - 1]
  }
}

/// Mora counts of the upper, middle and lower phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoraPattern {
  /// 上の句
  pub upper: usize,
  /// 中の句
  pub middle: usize,
  /// 下の句
  pub lower: usize,
}

impl MoraPattern {
  /// Constructor for MoraPattern
  pub const fn new(upper: usize, middle: usize, lower: usize) -> Self {
    Self { upper, middle, lower }
  }

  /// Total morae of the three phrases
  pub const fn total(&self) -> usize {
    self.upper + self.middle + self.lower
  }

  /// `[upper, middle, lower]`
  pub const fn as_array(&self) -> [usize; 3] {
    [self.upper, self.middle, self.lower]
  }
}

impl fmt::Display for MoraPattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}-{}", self.upper, self.middle, self.lower)
  }
}

/// The accepted verse shapes: standard 5-7-5 and three jiamari (字余り) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SenryuPattern {
  /// 5-7-5
  #[serde(rename = "5-7-5")]
  Standard,
  /// 5-8-5 (中八)
  #[serde(rename = "5-8-5")]
  JiamariMiddle,
  /// 6-7-5 (上六)
  #[serde(rename = "6-7-5")]
  JiamariUpper,
  /// 5-7-6 (下六)
  #[serde(rename = "5-7-6")]
  JiamariLower,
}

impl SenryuPattern {
  /// All variants, standard first
  pub const ALL: [SenryuPattern; 4] = [
    SenryuPattern::Standard,
    SenryuPattern::JiamariMiddle,
    SenryuPattern::JiamariUpper,
    SenryuPattern::JiamariLower,
  ];

  /// Label such as `"5-7-5"`
  pub fn as_str(&self) -> &'static str {
    match self {
      SenryuPattern::Standard => "5-7-5",
      SenryuPattern::JiamariMiddle => "5-8-5",
      SenryuPattern::JiamariUpper => "6-7-5",
      SenryuPattern::JiamariLower => "5-7-6",
    }
  }

  /// The mora triple this pattern stands for
  pub const fn mora_pattern(&self) -> MoraPattern {
    match self {
      SenryuPattern::Standard => MoraPattern::new(5, 7, 5),
      SenryuPattern::JiamariMiddle => MoraPattern::new(5, 8, 5),
      SenryuPattern::JiamariUpper => MoraPattern::new(6, 7, 5),
      SenryuPattern::JiamariLower => MoraPattern::new(5, 7, 6),
    }
  }

  /// `true` only for 5-7-5
  pub const fn is_standard(&self) -> bool {
    matches!(self, SenryuPattern::Standard)
  }
}

impl fmt::Display for SenryuPattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A verse found in the analyzed text.
///
/// `start_position` and `end_position` are character offsets into
/// `original_text`, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
  /// Matched pattern
  pub pattern: SenryuPattern,

  /// 上の句
  pub upper_phrase: Phrase,

  /// 中の句
  pub middle_phrase: Phrase,

  /// 下の句
  pub lower_phrase: Phrase,

  /// Start character offset (inclusive)
  pub start_position: usize,

  /// End character offset (exclusive)
  pub end_position: usize,

  /// The whole analyzed text
  pub original_text: String,

  /// The matched part of `original_text`
  pub text: String,

  /// Mora counts of the three phrases
  pub mora_pattern: MoraPattern,

  /// Readings of the three phrases concatenated without separators
  pub full_reading: String,

  /// Always `true` for results returned by the detector
  pub is_valid: bool,

  /// `true` only for 5-7-5
  pub is_standard: bool,
}

impl DetectionResult {
  /// Length of the matched span in characters
  pub fn char_len(&self) -> usize {
    self.end_position - self.start_position
  }

  /// `true` when the two results share at least one character
  pub fn overlaps(&self, other: &DetectionResult) -> bool {
    self.start_position < other.end_position && other.start_position < self.end_position
  }
}
