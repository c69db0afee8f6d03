//! Morphological analyzer backed by vibrato-rkyv
//!
//! Converts vibrato tokens into detector [`Token`]s: the part of speech is the
//! first feature field and the reading is taken from the dictionary's reading
//! columns, normalized to hiragana.

use std::ops::Range;
use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use crate::config::DictionaryPreset;
use crate::errors::TokenizerError;
use crate::models::{SYMBOL_POS, Token};
use crate::mora::{is_kana_reading, normalize_reading};

/// Longest input accepted by [`VibratoAnalyzer::analyze`], in characters.
pub const MAX_INPUT_CHARS: usize = u16::MAX as usize;

/// Part of speech given to text the analyzer did not cover.
const GAP_POS: &str = "空白";

/// Produces a token stream that tiles the input text.
///
/// This is the seam between the detector and any morphological analyzer.
pub trait MorphologicalAnalyzer: Send + Sync {
  /// Splits `text` into tokens whose surfaces concatenate back to `text`.
  ///
  /// # Errors
  /// `TokenizerError` when the text cannot be analyzed.
  fn analyze(&self, text: &str) -> Result<Vec<Token>, TokenizerError>;
}

/// Column layout of the feature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
  /// `品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音`
  Ipadic,
  /// `pos1,pos2,pos3,pos4,cType,cForm,lForm,lemma,orth,pron,…,kana,…`
  Unidic,
}

impl FeatureLayout {
  /// Feature columns tried, in order, for the reading
  pub fn reading_fields(&self) -> &'static [usize] {
    match self {
      // 読み, 発音
      FeatureLayout::Ipadic => &[7, 8],
      // kana, pron
      FeatureLayout::Unidic => &[20, 9],
    }
  }
}

impl From<DictionaryPreset> for FeatureLayout {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => FeatureLayout::Ipadic,
      DictionaryPreset::UnidicCwj | DictionaryPreset::UnidicCsj => FeatureLayout::Unidic,
    }
  }
}

/// Builds a detector token from a vibrato surface and feature string.
///
/// - symbols, punctuation and whitespace get an empty reading (0 morae)
/// - otherwise the first kana column of `layout` is the reading
/// - a token without a kana column reads as its surface when the surface is kana
/// - anything else gets an empty reading
pub fn token_from_feature(surface: &str, feature: &str, layout: FeatureLayout) -> Token {
  let fields: Vec<&str> = feature.split(',').collect();
  let pos = fields.first().copied().unwrap_or_default();

  if SYMBOL_POS.contains(&pos) {
    return Token::new(surface, "", pos);
  }

  let reading = layout
    .reading_fields()
    .iter()
    .filter_map(|&index| fields.get(index).copied())
    .find(|field| is_kana_reading(field))
    .or_else(|| is_kana_reading(surface).then_some(surface))
    .map(normalize_reading)
    .unwrap_or_default();

  Token::new(surface, reading, pos)
}

/// Fills byte ranges not covered by `pieces` with zero-mora tokens.
///
/// `pieces` must be in ascending, non-overlapping order.
fn tile(text: &str, pieces: Vec<(Range<usize>, Token)>) -> Vec<Token> {
  let mut tokens = Vec::with_capacity(pieces.len());
  let mut cursor = 0;

  for (range, token) in pieces {
    if range.start > cursor {
      tokens.push(Token::new(&text[cursor..range.start], "", GAP_POS));
    }
    cursor = range.end;
    tokens.push(token);
  }
  if cursor < text.len() {
    tokens.push(Token::new(&text[cursor..], "", GAP_POS));
  }

  tokens
}

/// vibrato-rkyv based analyzer
///
/// - Holds only a shared dictionary reference
/// - `Clone + Send + Sync`
#[derive(Clone)]
pub struct VibratoAnalyzer {
  inner: VibratoImpl,
  layout: FeatureLayout,
}

impl VibratoAnalyzer {
  /// Constructs an analyzer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use senryu::dictionary::DictionaryManager;
  /// # use senryu::tokenizer::{FeatureLayout, VibratoAnalyzer};
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let analyzer = VibratoAnalyzer::from_shared_dictionary(dict, FeatureLayout::Ipadic);
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>, layout: FeatureLayout) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
      layout,
    }
  }

  /// Feature layout used to find readings
  pub fn layout(&self) -> FeatureLayout {
    self.layout
  }
}

impl MorphologicalAnalyzer for VibratoAnalyzer {
  fn analyze(&self, text: &str) -> Result<Vec<Token>, TokenizerError> {
    if text.is_empty() {
      return Ok(Vec::new());
    }
    let chars = text.chars().count();
    if chars > MAX_INPUT_CHARS {
      return Err(TokenizerError::InvalidInput {
        reason: format!("{chars} characters exceeds the limit of {MAX_INPUT_CHARS}"),
      });
    }

    // worker holds the lattice; one per call
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(text = %text, "Start morphological analysis");

    let mut pieces = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      let surface = token.surface();
      let feature = token.feature();
      let range = token.range_byte();
      let converted = token_from_feature(surface, feature, self.layout);

      debug!(
        surface = %surface,
        ?feature,
        start = range.start,
        end = range.end,
        reading = converted.reading(),
        mora = converted.mora_count(),
        "Token"
      );

      pieces.push((range, converted));
    }

    let tokens = tile(text, pieces);

    debug!(
      total_tokens = tokens.len(),
      total_mora = tokens.iter().map(Token::mora_count).sum::<usize>(),
      "Morphological analysis completed"
    );

    Ok(tokens)
  }
}
