use super::segment::is_kana;
use crate::Result;

/// One token of converted text with both kana renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// The input slice this reading covers.
    pub surface: String,
    pub katakana: String,
    pub hiragana: String,
}

/// Script-conversion collaborator.
///
/// Implementations must be safe to share across requests; the pipeline holds
/// one handle for the lifetime of the process.
pub trait ScriptConverter: Send + Sync {
    /// Split `text` into tokens and read each one.
    fn readings(&self, text: &str) -> Result<Vec<Reading>>;

    fn to_katakana(&self, text: &str) -> Result<String> {
        Ok(self
            .readings(text)?
            .into_iter()
            .map(|r| r.katakana)
            .collect())
    }

    fn to_hiragana(&self, text: &str) -> Result<String> {
        Ok(self
            .readings(text)?
            .into_iter()
            .map(|r| r.hiragana)
            .collect())
    }
}

/// Built-in converter that folds between katakana and hiragana.
///
/// Kana runs get both renderings. Halfwidth katakana is widened and a
/// following halfwidth voicing mark is composed into the kana before it.
/// Katakana with no hiragana counterpart (ヷ, small ㇰ, ヿ) folds to the
/// closest hiragana spelling. Any other run is its own reading in both
/// scripts, which is how the converter reports text it cannot read.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaConverter;

impl ScriptConverter for KanaConverter {
    fn readings(&self, text: &str) -> Result<Vec<Reading>> {
        let mut readings = Vec::new();
        let mut rest = text;

        while let Some(first) = rest.chars().next() {
            let kana_run = is_kana(first);
            let len = rest
                .char_indices()
                .find(|&(_, c)| is_kana(c) != kana_run)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());
            let surface = &rest[..len];

            let reading = if kana_run {
                let wide = widen(surface);
                let mut hiragana = String::with_capacity(wide.len());
                for ch in wide.chars() {
                    push_hiragana(ch, &mut hiragana);
                }
                Reading {
                    surface: surface.to_string(),
                    katakana: wide.chars().map(katakana_of).collect(),
                    hiragana,
                }
            } else {
                Reading {
                    surface: surface.to_string(),
                    katakana: surface.to_string(),
                    hiragana: surface.to_string(),
                }
            };
            readings.push(reading);
            rest = &rest[len..];
        }

        Ok(readings)
    }
}

/// Halfwidth katakana U+FF66..=U+FF9D in code point order.
const HALFWIDTH_KATAKANA: &str =
    "ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン";

/// Small katakana extensions U+31F0..=U+31FF, read as their full-size hiragana.
const SMALL_KATAKANA_READINGS: &str = "くしすとぬはひふへほむらりるれろ";

const HALFWIDTH_VOICED: char = '\u{FF9E}';
const HALFWIDTH_SEMI_VOICED: char = '\u{FF9F}';
const COMBINING_VOICED: char = '\u{3099}';
const COMBINING_SEMI_VOICED: char = '\u{309A}';

const KANA_OFFSET: u32 = 0x60;

/// Widen halfwidth katakana and compose halfwidth voicing marks.
///
/// A mark that cannot compose with the kana before it becomes the
/// combining mark.
fn widen(run: &str) -> String {
    let mut out = String::with_capacity(run.len());
    for ch in run.chars() {
        let (step, combining) = match ch {
            HALFWIDTH_VOICED => (1, COMBINING_VOICED),
            HALFWIDTH_SEMI_VOICED => (2, COMBINING_SEMI_VOICED),
            _ => {
                out.push(widen_char(ch));
                continue;
            }
        };
        match out.pop() {
            Some(base) => match compose(base, step) {
                Some(composed) => out.push(composed),
                None => {
                    out.push(base);
                    out.push(combining);
                }
            },
            None => out.push(combining),
        }
    }
    out
}

fn widen_char(ch: char) -> char {
    match ch {
        '\u{FF66}'..='\u{FF9D}' => HALFWIDTH_KATAKANA
            .chars()
            .nth((ch as u32 - 0xFF66) as usize)
            .unwrap_or(ch),
        _ => ch,
    }
}

/// Voiced (`step` 1) or semi-voiced (`step` 2) form of a fullwidth katakana.
fn compose(base: char, step: u32) -> Option<char> {
    let composed = match (base, step) {
        ('ウ', 1) => 'ヴ',
        ('ワ', 1) => 'ヷ',
        ('ヲ', 1) => 'ヺ',
        ('カ'..='ト', 1) if "カキクケコサシスセソタチツテト".contains(base) => {
            char::from_u32(base as u32 + 1)?
        }
        ('ハ'..='ホ', _) if "ハヒフヘホ".contains(base) => char::from_u32(base as u32 + step)?,
        _ => return None,
    };
    Some(composed)
}

fn push_hiragana(ch: char, out: &mut String) {
    match ch {
        '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => {
            out.push(char::from_u32(ch as u32 - KANA_OFFSET).unwrap_or(ch))
        }
        'ヷ' | 'ヸ' | 'ヹ' | 'ヺ' => {
            out.push(char::from_u32(ch as u32 - 0x30F7 + 'わ' as u32).unwrap_or(ch));
            out.push(COMBINING_VOICED);
        }
        'ヿ' => out.push_str("こと"),
        '\u{31F0}'..='\u{31FF}' => out.push(
            SMALL_KATAKANA_READINGS
                .chars()
                .nth((ch as u32 - 0x31F0) as usize)
                .unwrap_or(ch),
        ),
        _ => out.push(ch),
    }
}

fn katakana_of(ch: char) -> char {
    match ch {
        '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}' => {
            char::from_u32(ch as u32 + KANA_OFFSET).unwrap_or(ch)
        }
        _ => ch,
    }
}

/// True for characters that belong to the transcript's target script.
pub(crate) fn is_hiragana_script(ch: char) -> bool {
    matches!(ch, '\u{3041}'..='\u{3096}' | '\u{3099}'..='\u{309F}' | 'ー')
}
