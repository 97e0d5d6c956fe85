use super::tables::punctuation_prefix_len;

/// A maximal run of one script class, borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Han ideographs.
    Ideograph(&'a str),
    /// ASCII letters.
    Latin(&'a str),
    /// Hiragana, katakana and the long-vowel mark.
    Kana(&'a str),
    /// One sentence punctuation mark (possibly multi-character, e.g. `...`).
    Punctuation(&'a str),
    Whitespace(&'a str),
    /// Any other single character. Never reaches the transcript.
    Other(char),
}

/// Split `text` into script-class segments.
///
/// The scan is greedy and left to right: at each position the first matching
/// class wins, in the order ideograph, Latin, kana, punctuation, whitespace.
/// Anything else becomes a one-character [`Segment::Other`].
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let (segment, len) = if is_han(ch) {
            let len = run_len(rest, is_han);
            (Segment::Ideograph(&rest[..len]), len)
        } else if ch.is_ascii_alphabetic() {
            let len = run_len(rest, |c| c.is_ascii_alphabetic());
            (Segment::Latin(&rest[..len]), len)
        } else if is_kana(ch) {
            let len = run_len(rest, is_kana);
            (Segment::Kana(&rest[..len]), len)
        } else if let Some(len) = punctuation_prefix_len(rest) {
            (Segment::Punctuation(&rest[..len]), len)
        } else if ch.is_whitespace() {
            let len = run_len(rest, char::is_whitespace);
            (Segment::Whitespace(&rest[..len]), len)
        } else {
            (Segment::Other(ch), ch.len_utf8())
        };

        segments.push(segment);
        rest = &rest[len..];
    }

    segments
}

fn run_len(text: &str, class: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !class(c))
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Han script, including the iteration mark and ideographic zero.
pub(crate) fn is_han(ch: char) -> bool {
    matches!(ch,
        '\u{3005}' | '\u{3007}' | '\u{3021}'..='\u{3029}' | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FA1F}'
        | '\u{30000}'..='\u{3134F}')
}

/// Hiragana, katakana (full and halfwidth, with extensions), voicing marks
/// and the prolonged sound mark.
pub(crate) fn is_kana(ch: char) -> bool {
    matches!(ch,
        '\u{3041}'..='\u{3096}' | '\u{3099}'..='\u{309F}'
        | '\u{30A1}'..='\u{30FA}' | '\u{30FC}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}')
}
