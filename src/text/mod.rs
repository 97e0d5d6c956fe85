//! Mixed-script text to hiragana transcript.
//!
//! Input is segmented by script class, each segment is converted on its own
//! (pinyin table for ideographs, letter names or the script converter for
//! Latin, passthrough for kana, a fixed map for punctuation), and the joined
//! result is folded to hiragana in one final script-conversion pass.
//!
//! ```rust
//! use yukkuri_rs::text::Transliterator;
//!
//! let transcript = Transliterator::default().transliterate("你好。")?;
//! assert_eq!(transcript.text, "にぃはお。");
//! # Ok::<(), yukkuri_rs::YukkuriError>(())
//! ```

pub mod kana;
pub mod romanize;
pub mod segment;
pub mod syllables;
pub mod tables;

pub use kana::{KanaConverter, Reading, ScriptConverter};
pub use romanize::{PinyinRomanizer, Romanizer};
pub use segment::{segment, Segment};

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::Result;
use kana::is_hiragana_script;
use syllables::{SYLLABLES, SYLLABLE_OVERRIDES};
use tables::{is_transcript_punctuation, letter_name, normalize_punctuation};

static SHARED_ROMANIZER: Lazy<Arc<dyn Romanizer>> = Lazy::new(|| Arc::new(PinyinRomanizer));
static SHARED_CONVERTER: Lazy<Arc<dyn ScriptConverter>> = Lazy::new(|| Arc::new(KanaConverter));

/// Input that had no rendering and was left out of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unmapped {
    /// A romanized syllable missing from the syllable table.
    Syllable(String),
    /// A character no converter handles.
    Character(char),
}

/// The string handed to the synthesis engine, plus what was dropped on the
/// way there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    pub text: String,
    pub unmapped: Vec<Unmapped>,
}

impl Transcript {
    /// True when every input character made it into the transcript.
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}

/// Converts mixed Chinese/Latin/kana text into a hiragana transcript.
///
/// Cheap to clone; collaborator handles are shared.
#[derive(Clone)]
pub struct Transliterator {
    romanizer: Arc<dyn Romanizer>,
    converter: Arc<dyn ScriptConverter>,
}

impl Default for Transliterator {
    /// Uses the process-wide pinyin romanizer and kana converter.
    fn default() -> Self {
        Self::new(SHARED_ROMANIZER.clone(), SHARED_CONVERTER.clone())
    }
}

impl Transliterator {
    pub fn new(romanizer: Arc<dyn Romanizer>, converter: Arc<dyn ScriptConverter>) -> Self {
        Self {
            romanizer,
            converter,
        }
    }

    /// Produce the phonetic transcript for `text`.
    ///
    /// Fails only when a collaborator fails. Unmapped input is dropped and
    /// listed in [`Transcript::unmapped`].
    pub fn transliterate(&self, text: &str) -> Result<Transcript> {
        let mut assembled = String::with_capacity(text.len() * 2);
        let mut unmapped = Vec::new();

        for segment in segment(text) {
            match segment {
                Segment::Ideograph(run) => {
                    self.push_ideographs(run, &mut assembled, &mut unmapped)?
                }
                Segment::Latin(word) => self.push_latin(word, &mut assembled)?,
                Segment::Kana(run) => assembled.push_str(run),
                Segment::Punctuation(mark) => match normalize_punctuation(mark) {
                    Some(normalized) => assembled.push_str(normalized),
                    None => unmapped.extend(mark.chars().map(Unmapped::Character)),
                },
                Segment::Whitespace(run) => assembled.push_str(run),
                Segment::Other(ch) => unmapped.push(Unmapped::Character(ch)),
            }
        }

        let converted = self.converter.to_hiragana(&assembled)?;
        let mut transcript = String::with_capacity(converted.len());
        for ch in converted.chars() {
            if is_hiragana_script(ch) || is_transcript_punctuation(ch) || ch.is_whitespace() {
                transcript.push(ch);
            } else {
                unmapped.push(Unmapped::Character(ch));
            }
        }

        if !unmapped.is_empty() {
            log::debug!("Dropped {} unmapped item(s): {unmapped:?}", unmapped.len());
        }
        log::debug!("Transcript for {text:?}: {transcript:?}");

        Ok(Transcript {
            text: transcript,
            unmapped,
        })
    }

    fn push_ideographs(
        &self,
        run: &str,
        out: &mut String,
        unmapped: &mut Vec<Unmapped>,
    ) -> Result<()> {
        for ch in run.chars() {
            let candidates = self.romanizer.syllables(ch)?;
            let Some(primary) = candidates.first() else {
                unmapped.push(Unmapped::Character(ch));
                continue;
            };
            match syllable_to_katakana(primary) {
                Some(kana) => out.push_str(kana),
                None => unmapped.push(Unmapped::Syllable(primary.clone())),
            }
        }
        Ok(())
    }

    fn push_latin(&self, word: &str, out: &mut String) -> Result<()> {
        let mut letters = word.chars();
        if let (Some(letter), None) = (letters.next(), letters.next()) {
            out.push_str(letter_name(letter).unwrap_or_default());
            return Ok(());
        }

        let reading = self.converter.to_katakana(word)?;
        if reading.chars().any(segment::is_kana) {
            out.push_str(&reading);
        } else {
            // No reading from the converter: spell the word out.
            word.chars()
                .filter_map(letter_name)
                .for_each(|name| out.push_str(name));
        }
        Ok(())
    }
}

/// Katakana rendering of one tone-stripped pinyin syllable.
pub fn syllable_to_katakana(syllable: &str) -> Option<&'static str> {
    SYLLABLE_OVERRIDES
        .iter()
        .find(|(from, _)| *from == syllable)
        .map(|(_, to)| *to)
        .or_else(|| SYLLABLES.get(syllable).copied())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{
        syllable_to_katakana, KanaConverter, Reading, Romanizer, ScriptConverter, Transliterator,
        Unmapped,
    };
    use crate::{Result, YukkuriError};

    struct FixedRomanizer(&'static [(char, &'static str)]);

    impl Romanizer for FixedRomanizer {
        fn syllables(&self, ideograph: char) -> Result<Vec<String>> {
            Ok(self
                .0
                .iter()
                .filter(|(ch, _)| *ch == ideograph)
                .map(|(_, s)| s.to_string())
                .collect())
        }
    }

    struct BrokenConverter;

    impl ScriptConverter for BrokenConverter {
        fn readings(&self, _text: &str) -> Result<Vec<Reading>> {
            Err(YukkuriError::ScriptConversion("session closed".to_string()))
        }
    }

    fn with_romanizer(table: &'static [(char, &'static str)]) -> Transliterator {
        Transliterator::new(Arc::new(FixedRomanizer(table)), Arc::new(KanaConverter))
    }

    #[test]
    fn ideographs_read_through_pinyin_table() {
        let transcript = Transliterator::default().transliterate("你好").unwrap();
        assert_eq!(transcript.text, "にぃはお");
        assert!(transcript.is_complete());
    }

    #[test]
    fn single_letter_reads_letter_name() {
        let transcript = Transliterator::default().transliterate("A").unwrap();
        assert_eq!(transcript.text, "えー");
        let transcript = Transliterator::default().transliterate("b").unwrap();
        assert_eq!(transcript.text, "びー");
    }

    #[test]
    fn halfwidth_period_becomes_full_stop() {
        let transcript = Transliterator::default().transliterate(".").unwrap();
        assert_eq!(transcript.text, "。");
    }

    #[test]
    fn kana_and_whitespace_pass_through() {
        let transcript = Transliterator::default()
            .transliterate("ゆっくり していってね")
            .unwrap();
        assert_eq!(transcript.text, "ゆっくり していってね");
    }

    #[test]
    fn katakana_input_is_folded_to_hiragana() {
        let transcript = Transliterator::default().transliterate("テスト！").unwrap();
        assert_eq!(transcript.text, "てすと！");
    }

    #[test]
    fn halfwidth_and_extended_katakana_survive() {
        let transcript = Transliterator::default()
            .transliterate("ｶﾞｷﾞﾊﾟ ヷㇰ")
            .unwrap();
        assert_eq!(transcript.text, "がぎぱ わ\u{3099}く");
        assert!(transcript.is_complete());
    }

    #[test]
    fn unreadable_latin_word_is_spelled() {
        let transcript = Transliterator::default().transliterate("ok").unwrap();
        assert_eq!(transcript.text, "おーけー");
    }

    #[test]
    fn other_characters_are_dropped_and_reported() {
        let transcript = Transliterator::default().transliterate("A1;B").unwrap();
        assert_eq!(transcript.text, "えーびー");
        assert_eq!(
            transcript.unmapped,
            vec![Unmapped::Character('1'), Unmapped::Character(';')]
        );
    }

    #[test]
    fn unknown_syllables_are_dropped_and_reported() {
        let transliterator = with_romanizer(&[('甲', "ni"), ('乙', "zzz"), ('丙', "hao")]);
        let transcript = transliterator.transliterate("甲乙丙").unwrap();
        assert_eq!(transcript.text, "にぃはお");
        assert_eq!(
            transcript.unmapped,
            vec![Unmapped::Syllable("zzz".to_string())]
        );
    }

    #[test]
    fn ideograph_without_reading_is_reported() {
        let transliterator = with_romanizer(&[('甲', "ni")]);
        let transcript = transliterator.transliterate("甲乙").unwrap();
        assert_eq!(transcript.text, "にぃ");
        assert_eq!(transcript.unmapped, vec![Unmapped::Character('乙')]);
    }

    #[test]
    fn only_primary_candidate_is_used() {
        let transliterator = with_romanizer(&[('还', "hai"), ('还', "huan")]);
        let transcript = transliterator.transliterate("还").unwrap();
        assert_eq!(transcript.text, "はい");
    }

    #[test]
    fn yu_syllables_use_overrides() {
        assert_eq!(syllable_to_katakana("yuan"), Some("ユエン"));
        assert_eq!(syllable_to_katakana("yue"), Some("ユエ"));
        assert_eq!(syllable_to_katakana("yun"), Some("ユン"));
        assert_eq!(syllable_to_katakana("yu"), Some("ユ"));
        assert_eq!(syllable_to_katakana("zzz"), None);
    }

    #[test]
    fn punctuation_forms_normalize() {
        let transcript = Transliterator::default()
            .transliterate("你好，世界！...——")
            .unwrap();
        assert!(transcript.text.starts_with("にぃはお、"));
        assert!(transcript.text.ends_with("！…ーー"));
    }

    #[test]
    fn converter_failure_is_fatal() {
        let transliterator = Transliterator::new(
            Arc::new(super::PinyinRomanizer),
            Arc::new(BrokenConverter),
        );
        let err = transliterator.transliterate("你好").unwrap_err();
        assert!(matches!(err, YukkuriError::ScriptConversion(_)));
    }

    #[test]
    fn transcript_is_deterministic() {
        let text = "我想用这个生成Yukkuri语音……";
        let first = Transliterator::default().transliterate(text).unwrap();
        let second = Transliterator::default().transliterate(text).unwrap();
        assert_eq!(first, second);
        assert!(!first.text.is_empty());
    }

    #[test]
    fn empty_text_gives_empty_transcript() {
        let transcript = Transliterator::default().transliterate("").unwrap();
        assert_eq!(transcript, Default::default());
    }
}
