//! Prose extraction from book HTML documents
//!
//! The source site nests book prose inside `<div>` elements, with decorative
//! captions marked `align="center"`. This module decides which divs count as
//! prose leaves, applies the word-count filter, and handles the site's legacy
//! Windows-1251 encoding.

use encoding_rs::WINDOWS_1251;
use scraper::{ElementRef, Html, Selector};

/// Lower bound of the word filter: blocks at or below this are page furniture
pub const MIN_BLOCK_WORDS: usize = 100;

/// Upper bound of the word filter: blocks at or above this indicate a
/// mis-fired selection that matched an ancestor wrapping the whole book
pub const MAX_BLOCK_WORDS: usize = 10_000;

/// One extracted block of prose and its word count
///
/// Immutable once created: produced by [`extract_blocks`], consumed by the
/// corpus accumulator, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    text: String,
    words: usize,
}

impl TextBlock {
    /// Creates a block from raw text
    ///
    /// The stored text is trimmed of leading and trailing whitespace; the
    /// word count is taken from a whitespace split of the raw text.
    pub fn new(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self {
            text: text.trim().to_string(),
            words,
        }
    }

    /// The trimmed block text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of whitespace-separated words in the block
    pub fn words(&self) -> usize {
        self.words
    }
}

/// Extracts candidate prose blocks from one HTML document
///
/// A `<div>` qualifies as a prose leaf if it contains no descendant divs, or
/// if every descendant div is a centered caption (`align="center"`). The rule
/// skips structural wrapper divs while admitting prose that happens to contain
/// decorative sub-elements. Qualifying text must contain strictly more than
/// [`MIN_BLOCK_WORDS`] and strictly fewer than [`MAX_BLOCK_WORDS`] words.
///
/// Blocks are returned in document order. Beyond end-trimming, the text is
/// not normalized; there is no de-hyphenation and no encoding repair, a known
/// limitation carried forward.
pub fn extract_blocks(html: &str) -> Vec<TextBlock> {
    let document = Html::parse_document(html);

    let Ok(div_selector) = Selector::parse("div") else {
        return Vec::new();
    };
    let Ok(centered_selector) = Selector::parse(r#"div[align="center"]"#) else {
        return Vec::new();
    };

    let mut blocks = Vec::new();

    for element in document.select(&div_selector) {
        if !is_prose_leaf(element, &div_selector, &centered_selector) {
            continue;
        }

        let text: String = element.text().collect();
        let block = TextBlock::new(&text);
        if block.words() > MIN_BLOCK_WORDS && block.words() < MAX_BLOCK_WORDS {
            blocks.push(block);
        }
    }

    blocks
}

/// The prose-leaf predicate: no descendant divs, or every descendant div
/// is accounted for by the centered subset
fn is_prose_leaf(
    element: ElementRef,
    div_selector: &Selector,
    centered_selector: &Selector,
) -> bool {
    let subdivs = element.select(div_selector).count();
    if subdivs == 0 {
        return true;
    }
    element.select(centered_selector).count() == subdivs
}

/// Decodes raw bytes from the site's legacy Windows-1251 encoding
///
/// Returns `None` if the bytes contain sequences with no mapping; callers
/// treat that as a fatal decode error, not a recoverable one.
pub fn decode_windows_1251(bytes: &[u8]) -> Option<String> {
    let (text, _, had_errors) = WINDOWS_1251.decode(bytes);
    if had_errors {
        return None;
    }
    Some(text.into_owned())
}
