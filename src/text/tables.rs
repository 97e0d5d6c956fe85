//! Letter-name and punctuation tables.

/// Katakana letter names for `A`..=`Z`, indexed by `letter - b'A'`.
const LETTER_NAMES: [&str; 26] = [
    "エー",
    "ビー",
    "シー",
    "ディー",
    "イー",
    "エフ",
    "ジー",
    "エイチ",
    "アイ",
    "ジェー",
    "ケー",
    "エル",
    "エム",
    "エヌ",
    "オー",
    "ピー",
    "キュー",
    "アール",
    "エス",
    "ティー",
    "ユー",
    "ブイ",
    "ダブリュー",
    "エックス",
    "ワイ",
    "ゼット",
];

/// Look up the katakana name of an ASCII letter, case-insensitively.
pub fn letter_name(letter: char) -> Option<&'static str> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let idx = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    Some(LETTER_NAMES[idx])
}

/// Sentence punctuation kept for synthesis and its Japanese rendering.
///
/// Multi-character marks come first so a longest-match scan over this slice
/// prefers `...` over `.`.
pub(crate) const PUNCTUATION: &[(&str, &str)] = &[
    ("...", "…"),
    ("——", "ーー"),
    ("。", "。"),
    ("，", "、"),
    ("、", "、"),
    ("？", "？"),
    ("！", "！"),
    (".", "。"),
    (",", "、"),
    ("?", "？"),
    ("!", "！"),
    ("…", "…"),
];

/// Map a punctuation mark to the punctuation the engine understands.
pub fn normalize_punctuation(mark: &str) -> Option<&'static str> {
    PUNCTUATION
        .iter()
        .find(|(from, _)| *from == mark)
        .map(|(_, to)| *to)
}

/// Length in bytes of the punctuation mark at the start of `text`, if any.
pub(crate) fn punctuation_prefix_len(text: &str) -> Option<usize> {
    PUNCTUATION
        .iter()
        .find(|(from, _)| text.starts_with(from))
        .map(|(from, _)| from.len())
}

/// True for the punctuation glyphs that may appear in a final transcript.
pub(crate) fn is_transcript_punctuation(ch: char) -> bool {
    matches!(ch, '。' | '、' | '？' | '！' | '…')
}
