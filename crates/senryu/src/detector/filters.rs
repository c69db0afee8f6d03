//! 候補フィルタ
//!
//! パターン照合を通過した候補に追加の条件を課す。
//! どのフィルタも既定では無効で、`FilterConfig` で個別に有効化する。

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::config::FilterConfig;
use crate::detector::segmentation::SplitSpan;
use crate::models::Token;
use crate::mora::is_sokuon;

/// フィルタに渡す候補（分割位置 + トークン列全体への参照）
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
  /// 分割位置
  pub span: SplitSpan,
  /// 解析対象テキスト全体のトークン列
  pub tokens: &'a [Token],
}

impl<'a> Candidate<'a> {
  /// 候補範囲のトークン
  pub fn span_tokens(&self) -> &'a [Token] {
    let tokens = self.tokens;
    &tokens[self.span.tokens()]
  }

  /// 上・中・下の句それぞれのトークン
  pub fn phrase_tokens(&self) -> [&'a [Token]; 3] {
    let tokens = self.tokens;
    self.span.phrases().map(|range| &tokens[range])
  }
}

/// 候補フィルタ
pub trait CandidateFilter: Send + Sync {
  /// ログ出力用の名前
  fn name(&self) -> &'static str;

  /// 候補を残す場合 `true`
  fn accepts(&self, candidate: &Candidate<'_>) -> bool;
}

/// 文境界記号（句点・感嘆符など）をまたぐ候補を除外する
#[derive(Debug, Clone)]
pub struct SentenceBoundaryFilter {
  marks: HashSet<String>,
}

impl SentenceBoundaryFilter {
  /// 境界記号を指定して作成
  pub fn new<I, S>(marks: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      marks: marks.into_iter().map(Into::into).collect(),
    }
  }
}

impl Default for SentenceBoundaryFilter {
  fn default() -> Self {
    Self::new(crate::config::DEFAULT_BOUNDARY_MARKS)
  }
}

impl CandidateFilter for SentenceBoundaryFilter {
  fn name(&self) -> &'static str {
    "sentence_boundary"
  }

  fn accepts(&self, candidate: &Candidate<'_>) -> bool {
    !candidate.span_tokens().iter().any(|t| self.marks.contains(t.surface()))
  }
}

/// いずれかの句が促音（っ・ッ）で終わる候補を除外する
#[derive(Debug, Clone, Copy, Default)]
pub struct SokuonEndingFilter;

impl CandidateFilter for SokuonEndingFilter {
  fn name(&self) -> &'static str {
    "sokuon_ending"
  }

  fn accepts(&self, candidate: &Candidate<'_>) -> bool {
    candidate.phrase_tokens().iter().all(|phrase| {
      phrase
        .last()
        .is_none_or(|last| last.is_symbol() || !last.surface().chars().last().is_some_and(is_sokuon))
    })
  }
}

/// 句頭に来てはいけない品詞（助詞・助動詞など）で始まる候補を除外する
///
/// 品詞は素性先頭の大分類（`Token::pos`）と比較する。
#[derive(Debug, Clone)]
pub struct PhraseStartFilter {
  denied: HashSet<String>,
}

impl PhraseStartFilter {
  /// 句頭禁止品詞を指定して作成
  pub fn new<I, S>(denied: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      denied: denied.into_iter().map(Into::into).collect(),
    }
  }
}

impl Default for PhraseStartFilter {
  fn default() -> Self {
    Self::new(crate::config::DEFAULT_PHRASE_START_DENIED_POS)
  }
}

impl CandidateFilter for PhraseStartFilter {
  fn name(&self) -> &'static str {
    "phrase_start"
  }

  fn accepts(&self, candidate: &Candidate<'_>) -> bool {
    candidate
      .phrase_tokens()
      .iter()
      .all(|phrase| phrase.first().is_none_or(|first| !self.denied.contains(first.pos())))
  }
}

/// 読みを得られなかった語（未知語）を含む候補を除外する
///
/// - 記号類以外でモーラ数 0 のトークン
/// - 読みに ASCII 英数字が残っているトークン
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownWordFilter;

impl UnknownWordFilter {
  fn is_unknown(token: &Token) -> bool {
    if token.is_symbol() {
      return false;
    }
    token.mora_count() == 0 || token.reading().chars().any(|c| c.is_ascii_alphanumeric())
  }
}

impl CandidateFilter for UnknownWordFilter {
  fn name(&self) -> &'static str {
    "unknown_words"
  }

  fn accepts(&self, candidate: &Candidate<'_>) -> bool {
    !candidate.span_tokens().iter().any(Self::is_unknown)
  }
}

/// 全フィルタを順に評価し、すべてが受理した候補のみ残す
#[derive(Default)]
pub struct FilterChain {
  filters: Vec<Box<dyn CandidateFilter>>,
}

impl FilterChain {
  /// 空のチェーン（すべて受理）
  pub fn new() -> Self {
    Self::default()
  }

  /// 設定で有効化されたフィルタからチェーンを構築する
  pub fn from_config(config: &FilterConfig) -> Self {
    let mut chain = Self::new();
    if config.sentence_boundary {
      chain.push(SentenceBoundaryFilter::new(config.boundary_marks.iter().cloned()));
    }
    if config.sokuon_ending {
      chain.push(SokuonEndingFilter);
    }
    if config.phrase_start {
      chain.push(PhraseStartFilter::new(config.phrase_start_denied_pos.iter().cloned()));
    }
    if config.unknown_words {
      chain.push(UnknownWordFilter);
    }
    chain
  }

  /// フィルタを末尾に追加
  pub fn push<F: CandidateFilter + 'static>(&mut self, filter: F) {
    self.filters.push(Box::new(filter));
  }

  /// 登録済みフィルタ数
  pub fn len(&self) -> usize {
    self.filters.len()
  }

  /// フィルタ未登録なら `true`
  pub fn is_empty(&self) -> bool {
    self.filters.is_empty()
  }

  /// 登録順に評価し、最初に拒否したフィルタ名をログに残す
  pub fn accepts(&self, candidate: &Candidate<'_>) -> bool {
    match self.filters.iter().find(|f| !f.accepts(candidate)) {
      Some(filter) => {
        debug!(
          filter = filter.name(),
          start = candidate.span.start,
          end = candidate.span.end,
          "Candidate rejected"
        );
        false
      }
      None => true,
    }
  }
}

impl fmt::Debug for FilterChain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.filters.iter().map(|filter| filter.name())).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detector::segmentation::find_candidates;

  fn word(surface: &str, reading: &str, pos: &str) -> Token {
    Token::new(surface, reading, pos)
  }

  /// 古池や / 蛙飛び込む / 水の音
  fn furuike() -> Vec<Token> {
    vec![
      word("古池", "ふるいけ", "名詞"),
      word("や", "や", "助詞"),
      word("蛙", "かわず", "名詞"),
      word("飛び込む", "とびこむ", "動詞"),
      word("水", "みず", "名詞"),
      word("の", "の", "助詞"),
      word("音", "おと", "名詞"),
    ]
  }

  fn first_candidate(tokens: &[Token]) -> Candidate<'_> {
    let span = find_candidates(tokens)[0];
    Candidate { span, tokens }
  }

  #[test]
  fn sentence_boundary_rejects_inner_period() {
    let mut tokens = furuike();
    tokens.insert(2, word("。", "", "補助記号"));
    let candidate = first_candidate(&tokens);
    assert!(!SentenceBoundaryFilter::default().accepts(&candidate));
    assert!(SentenceBoundaryFilter::new(["！"]).accepts(&candidate));
  }

  #[test]
  fn sentence_boundary_accepts_clean_span() {
    let tokens = furuike();
    assert!(SentenceBoundaryFilter::default().accepts(&first_candidate(&tokens)));
  }

  #[test]
  fn sokuon_ending_rejects_phrase_ending_in_small_tsu() {
    let tokens = vec![
      word("ちょっと", "ちょっと", "副詞"),
      word("待っ", "まっ", "動詞"),
      word("かわずとびこむ", "かわずとびこむ", "名詞"),
      word("みずのおと", "みずのおと", "名詞"),
    ];
    let candidate = first_candidate(&tokens);
    assert_eq!(candidate.span.upper(), 0..2);
    assert!(!SokuonEndingFilter.accepts(&candidate));
    assert!(SokuonEndingFilter.accepts(&first_candidate(&furuike())));
  }

  #[test]
  fn phrase_start_rejects_particle_at_phrase_head() {
    let tokens = vec![
      word("ふるいけ", "ふるいけ", "名詞"),
      word("や", "や", "名詞"),
      word("を", "を", "助詞"),
      word("かわずとびこ", "かわずとびこ", "名詞"),
      word("みずのおと", "みずのおと", "名詞"),
    ];
    let candidate = first_candidate(&tokens);
    assert_eq!(candidate.span.middle(), 2..4);
    assert!(!PhraseStartFilter::default().accepts(&candidate));
    assert!(PhraseStartFilter::default().accepts(&first_candidate(&furuike())));
  }

  #[test]
  fn unknown_word_rejects_unreadable_tokens() {
    let mut tokens = furuike();
    tokens.insert(2, word("〓", "", "名詞"));
    assert!(!UnknownWordFilter.accepts(&first_candidate(&tokens)));

    let mut tokens = furuike();
    tokens[0] = word("古池", "furu", "名詞");
    tokens.insert(1, word("池", "け", "名詞"));
    assert!(!UnknownWordFilter.accepts(&first_candidate(&tokens)));

    // symbols without a reading are fine
    let mut tokens = furuike();
    tokens.insert(2, word("、", "", "補助記号"));
    assert!(UnknownWordFilter.accepts(&first_candidate(&tokens)));
  }

  #[test]
  fn chain_from_default_config_is_empty() {
    let chain = FilterChain::from_config(&FilterConfig::default());
    assert!(chain.is_empty());
    assert!(chain.accepts(&first_candidate(&furuike())));
  }

  #[test]
  fn strict_chain_has_every_filter() {
    let chain = FilterChain::from_config(&FilterConfig::strict());
    assert_eq!(chain.len(), 4);
    assert_eq!(
      format!("{chain:?}"),
      r#"["sentence_boundary", "sokuon_ending", "phrase_start", "unknown_words"]"#
    );
    assert!(chain.accepts(&first_candidate(&furuike())));
  }
}
