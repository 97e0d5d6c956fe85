use pinyin::ToPinyinMulti;

use crate::Result;

/// Romanization collaborator: one ideograph in, tone-stripped syllables out.
///
/// Candidates are returned in the collaborator's own preference order; only
/// the first is used for transliteration.
pub trait Romanizer: Send + Sync {
    fn syllables(&self, ideograph: char) -> Result<Vec<String>>;
}

/// Mandarin pinyin readings from the bundled `pinyin` dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn syllables(&self, ideograph: char) -> Result<Vec<String>> {
        let Some(readings) = ideograph.to_pinyin_multi() else {
            return Ok(Vec::new());
        };
        Ok((0..readings.count())
            .map(|idx| normalize_syllable(readings.get(idx).plain()))
            .collect())
    }
}

/// Spell `ü` the way the syllable table does, whichever form the
/// dictionary emits (`lv`, `lü`).
fn normalize_syllable(plain: &str) -> String {
    plain.replace('v', "ü")
}
