//! Text cleaning — standardizes extracted text while preserving line
//! structure. Newlines are load-bearing for the segmenter; only horizontal
//! whitespace is collapsed.

use lazy_static::lazy_static;
use regex::Regex;

const BULLET_GLYPHS: &[char] = &['•', '●', '▪', '■', '➤'];

pub fn clean_text(text: &str) -> String {
    lazy_static! {
        static ref HORIZONTAL_WS_RE: Regex = Regex::new(r"[ \t]+").unwrap();
        static ref BLANK_RUN_RE: Regex = Regex::new(r"\n\s*\n").unwrap();
    }

    if text.is_empty() {
        return String::new();
    }

    // Bullet normalization must run before the ASCII filter — the glyphs
    // themselves are non-ASCII.
    let text: String = text
        .chars()
        .map(|c| if BULLET_GLYPHS.contains(&c) { '-' } else { c })
        .filter(|c| c.is_ascii())
        .collect();

    let text = HORIZONTAL_WS_RE.replace_all(&text, " ");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");

    text.trim().to_string()
}
