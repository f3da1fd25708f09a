//! Text helpers for the PDF renderer.

use std::borrow::Cow;
use textwrap::{Options, WordSplitter};

/// Column width used when wrapping a candidate line.
pub const WRAP_COLUMNS: usize = 80;

/// Word-wrap `line` to `width` columns, breaking only at whitespace so
/// timestamps like `04:00:00-08:00` stay whole. Words longer than the width
/// are broken. An empty input still yields one (empty) line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let options = Options::new(width).word_splitter(WordSplitter::NoHyphenation);
    let wrapped: Vec<Cow<'_, str>> = textwrap::wrap(line, options);
    if wrapped.is_empty() {
        return vec![String::new()];
    }
    wrapped.into_iter().map(Cow::into_owned).collect()
}

/// Encode text for a standard Type1 font using WinAnsiEncoding.
///
/// Latin-1 code points map directly; the handful of characters WinAnsi
/// places in 0x80..0x9F are translated; anything else becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
