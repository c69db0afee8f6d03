//! crates/senryu/tests/property_tests.rs
//!
//! Invariants that hold for any token stream.

mod common;

use common::char_slice;
use proptest::prelude::*;
use senryu::models::Token;
use senryu::pattern::is_accepted;
use senryu::{count_mora, detect};

/// Readings of 0 to 4 morae, including small kana and symbols
fn token_strategy() -> impl Strategy<Value = Token> {
  prop_oneof![
    Just(Token::new("。", "", "補助記号")),
    Just(Token::new("、", "", "補助記号")),
    Just(Token::new("や", "や", "助詞")),
    Just(Token::new("今日", "きょう", "名詞")),
    Just(Token::new("池", "いけ", "名詞")),
    Just(Token::new("学校", "がっこう", "名詞")),
    Just(Token::new("蛙", "かわず", "名詞")),
    Just(Token::new("写真", "しゃしん", "名詞")),
    Just(Token::new("珈琲", "こーひー", "名詞")),
  ]
}

proptest! {
  #[test]
  fn results_stay_in_the_closed_set(tokens in prop::collection::vec(token_strategy(), 0..40)) {
    for result in detect(&tokens) {
      prop_assert!(is_accepted(result.mora_pattern));
      prop_assert_eq!(result.is_standard, result.mora_pattern.as_array() == [5, 7, 5]);
      prop_assert!(result.is_valid);
    }
  }

  #[test]
  fn phrase_morae_sum_to_the_triple(tokens in prop::collection::vec(token_strategy(), 0..40)) {
    for result in detect(&tokens) {
      let sum = result.upper_phrase.mora_count()
        + result.middle_phrase.mora_count()
        + result.lower_phrase.mora_count();
      prop_assert_eq!(sum, result.mora_pattern.total());
      prop_assert_eq!(sum, count_mora(&result.full_reading));
      for phrase in [&result.upper_phrase, &result.middle_phrase, &result.lower_phrase] {
        prop_assert!(!phrase.tokens().is_empty());
        prop_assert_eq!(phrase.mora_count(), count_mora(phrase.reading()));
      }
    }
  }

  #[test]
  fn spans_cover_their_text(tokens in prop::collection::vec(token_strategy(), 0..40)) {
    let results = detect(&tokens);
    let mut previous_start = 0;
    for result in &results {
      prop_assert!(result.start_position < result.end_position);
      prop_assert!(result.start_position >= previous_start);
      previous_start = result.start_position;
      prop_assert_eq!(
        char_slice(&result.original_text, result.start_position, result.end_position),
        result.text.clone()
      );
    }
  }

  #[test]
  fn detection_is_deterministic(tokens in prop::collection::vec(token_strategy(), 0..40)) {
    prop_assert_eq!(detect(&tokens), detect(&tokens));
  }

  #[test]
  fn mora_count_never_exceeds_length(s in "[ぁ-んァ-ヶー。a-z]{0,20}") {
    prop_assert!(count_mora(&s) <= s.chars().count());
  }
}
