//! Output formatting

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use senryu::models::{DetectionResult, Phrase, Token};

/// JSON document printed for one input in detection mode
#[derive(Debug, Serialize)]
struct DetectionReport<'a> {
  text: &'a str,
  count: usize,
  results: &'a [DetectionResult],
}

/// JSON document printed for one input in `--tokens` mode
#[derive(Debug, Serialize)]
struct TokenReport<'a> {
  text: &'a str,
  total_mora: usize,
  tokens: &'a [Token],
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
  let json = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
  Ok(json)
}

fn phrase_line(out: &mut String, label: &str, phrase: &Phrase) {
  let _ = writeln!(
    out,
    "    {label}: {} 「{}」 ({})",
    phrase.text(),
    phrase.reading(),
    phrase.mora_count()
  );
}

/// Renders the detection results for one input
///
/// # Errors
/// Only JSON serialization can fail.
pub fn render_results(
  text: &str,
  results: &[DetectionResult],
  json: bool,
  pretty: bool,
) -> Result<String> {
  if json {
    return to_json(
      &DetectionReport {
        text,
        count: results.len(),
        results,
      },
      pretty,
    );
  }

  let mut out = String::new();
  let _ = writeln!(out, "入力: {text}");
  if results.is_empty() {
    out.push_str("川柳は見つかりませんでした\n");
    return Ok(out);
  }

  let _ = writeln!(out, "検出: {}件", results.len());
  for (i, result) in results.iter().enumerate() {
    let _ = writeln!(
      out,
      "[{}] {} ({}..{}) {}",
      i + 1,
      result.pattern,
      result.start_position,
      result.end_position,
      result.text
    );
    phrase_line(&mut out, "上の句", &result.upper_phrase);
    phrase_line(&mut out, "中の句", &result.middle_phrase);
    phrase_line(&mut out, "下の句", &result.lower_phrase);
  }
  Ok(out)
}

/// Renders the morphological analysis of one input with per-token morae
///
/// # Errors
/// Only JSON serialization can fail.
pub fn render_tokens(text: &str, tokens: &[Token], json: bool, pretty: bool) -> Result<String> {
  let total_mora = tokens.iter().map(Token::mora_count).sum();

  if json {
    return to_json(
      &TokenReport {
        text,
        total_mora,
        tokens,
      },
      pretty,
    );
  }

  let mut out = String::new();
  let _ = writeln!(out, "入力: {text}");
  for token in tokens {
    let _ = writeln!(
      out,
      "{}\t{}\t{}\t{}",
      token.surface(),
      token.reading(),
      token.pos(),
      token.mora_count()
    );
  }
  let _ = writeln!(out, "合計: {total_mora} モーラ");
  Ok(out)
}
