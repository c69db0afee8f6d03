//! Mora counter for kana readings
//!
//! A reading is counted one character at a time with no look-ahead:
//!
//! - small ya/yu/yo and small vowels (`ゃゅょぁぃぅぇぉ` and their katakana forms) count 0
//!   because they merge with the preceding kana
//! - every other character counts 1, including the sokuon `っ`/`ッ`, the long vowel
//!   mark `ー` and any non-kana character the reading may contain
//!
//! ```
//! use senryu::mora::count_mora;
//!
//! assert_eq!(count_mora("こんにちは"), 5);
//! assert_eq!(count_mora("コンピューター"), 6);
//! ```

/// Offset between the katakana and hiragana blocks.
const KATAKANA_TO_HIRAGANA: u32 = 0x60;

/// Returns `true` for the small kana that merge with the preceding mora.
pub const fn is_non_counting_kana(c: char) -> bool {
  matches!(
    c,
    'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ャ' | 'ュ' | 'ョ' | 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ'
  )
}

/// Counts the morae of a reading.
///
/// Total and pure: the empty string yields 0 and the result never exceeds the
/// number of characters.
pub fn count_mora(reading: &str) -> usize {
  reading.chars().filter(|&c| !is_non_counting_kana(c)).count()
}

/// Sokuon (small tsu) in either script.
pub const fn is_sokuon(c: char) -> bool {
  matches!(c, 'っ' | 'ッ')
}

/// Long vowel mark.
pub const fn is_long_vowel_mark(c: char) -> bool {
  c == 'ー'
}

/// Hiragana, katakana or the long vowel mark.
pub const fn is_kana(c: char) -> bool {
  matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309F}' | '\u{30A1}'..='\u{30FA}' | '\u{30FC}'..='\u{30FF}')
}

/// `true` when the string is non-empty and made only of kana.
pub fn is_kana_reading(s: &str) -> bool {
  !s.is_empty() && s.chars().all(is_kana)
}

/// Converts katakana (U+30A1..=U+30F6) to hiragana, leaving every other character as is.
///
/// Readings from IPADIC and UniDic are katakana; the detector reports hiragana.
pub fn normalize_reading(reading: &str) -> String {
  reading
    .chars()
    .map(|c| match c {
      '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - KATAKANA_TO_HIRAGANA).unwrap_or(c),
      _ => c,
    })
    .collect()
}
