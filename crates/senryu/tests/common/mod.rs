//! Shared helpers for the integration tests.

#![allow(dead_code)]

use senryu::errors::TokenizerError;
use senryu::models::Token;
use senryu::tokenizer::MorphologicalAnalyzer;

/// `(surface, reading, pos)`
pub type Entry = (&'static str, &'static str, &'static str);

/// Small fixed lexicon covering the sample verses.
pub const LEXICON: &[Entry] = &[
  ("古池", "ふるいけ", "名詞"),
  ("や", "や", "助詞"),
  ("蛙", "かわず", "名詞"),
  ("飛び込む", "とびこむ", "動詞"),
  ("水", "みず", "名詞"),
  ("の", "の", "助詞"),
  ("音", "おと", "名詞"),
  ("今日", "きょう", "名詞"),
  ("も", "も", "助詞"),
  ("静かさ", "しずかさ", "名詞"),
  ("岩", "いわ", "名詞"),
  ("に", "に", "助詞"),
  ("しみ入る", "しみいる", "動詞"),
  ("蝉", "せみ", "名詞"),
  ("声", "こえ", "名詞"),
  ("夏草", "なつくさ", "名詞"),
  ("兵", "つわもの", "名詞"),
  ("ども", "ども", "接尾辞"),
  ("が", "が", "助詞"),
  ("夢", "ゆめ", "名詞"),
  ("跡", "あと", "名詞"),
  ("。", "", "補助記号"),
  ("、", "", "補助記号"),
  ("！", "", "補助記号"),
];

/// Greedy longest-match over [`LEXICON`]; unknown characters become zero-mora symbols.
pub fn tokenize(text: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut rest = text;

  while let Some(c) = rest.chars().next() {
    let entry = LEXICON
      .iter()
      .filter(|(surface, _, _)| rest.starts_with(surface))
      .max_by_key(|(surface, _, _)| surface.len());

    match entry {
      Some((surface, reading, pos)) => {
        tokens.push(Token::new(*surface, *reading, *pos));
        rest = &rest[surface.len()..];
      }
      None => {
        tokens.push(Token::new(c.to_string(), "", "補助記号"));
        rest = &rest[c.len_utf8()..];
      }
    }
  }

  tokens
}

/// Analyzer wrapping [`tokenize`]
pub struct LexiconAnalyzer;

impl MorphologicalAnalyzer for LexiconAnalyzer {
  fn analyze(&self, text: &str) -> Result<Vec<Token>, TokenizerError> {
    Ok(tokenize(text))
  }
}

/// One token per reading, surface = reading
pub fn kana_tokens(readings: &[&str]) -> Vec<Token> {
  readings.iter().map(|r| Token::new(*r, *r, "名詞")).collect()
}

/// Characters `start..end` of `text`
pub fn char_slice(text: &str, start: usize, end: usize) -> String {
  text.chars().skip(start).take(end - start).collect()
}
