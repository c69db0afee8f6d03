//! Text preprocessing applied before morphological analysis.

use std::sync::LazyLock;

use regex::Regex;

static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n").expect("static pattern"));
static PERIOD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"。+").expect("static pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Normalizes raw input text.
///
/// Substitutions run in this order:
///
/// 1. `\n` becomes `。` so that lines act as sentence boundaries
/// 2. runs of `。` collapse to one
/// 3. whitespace runs (including a leftover `\r`) collapse to a single ASCII space
/// 4. leading and trailing whitespace is removed
///
/// Result offsets are char positions in this normalized text.
pub fn normalize_text(text: &str) -> String {
  let normalized = NEWLINE.replace_all(text, "。");
  let normalized = PERIOD_RUN.replace_all(&normalized, "。");
  let normalized = WHITESPACE_RUN.replace_all(&normalized, " ");
  normalized.trim().to_string()
}

/// `true` if the text contains hiragana, katakana or a CJK ideograph.
pub fn contains_japanese(text: &str) -> bool {
  text.chars().any(|c| {
    matches!(
      c,
      '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}'
    )
  })
}
