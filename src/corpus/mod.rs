//! Corpus accumulation and output
//!
//! The [`Corpus`] owns every block extracted during one crawl run plus the
//! running word total, and decides when traversal should stop. Blocks are
//! kept in discovery order; the order carries no semantic meaning.

use crate::extract::TextBlock;
use crate::Result;
use std::fs;
use std::path::Path;

/// Accumulated corpus state for one crawl run
#[derive(Debug)]
pub struct Corpus {
    blocks: Vec<TextBlock>,
    total_words: u64,
    max_words: u64,
}

impl Corpus {
    /// Creates an empty corpus with the given word budget
    pub fn new(max_words: u64) -> Self {
        Self {
            blocks: Vec::new(),
            total_words: 0,
            max_words,
        }
    }

    /// Appends every block from one book
    ///
    /// This is the only mutation path. Calls must stay serialized relative to
    /// the budget check; there is no deduplication, so adding the same blocks
    /// twice duplicates entries and doubles the total.
    pub fn add_book(&mut self, blocks: impl IntoIterator<Item = TextBlock>) {
        for block in blocks {
            self.total_words += block.words() as u64;
            self.blocks.push(block);
        }
    }

    /// True once the running total strictly exceeds the budget
    ///
    /// The total never decreases, so once true this stays true for the rest
    /// of the run. The driver checks it after each whole book, which means
    /// the final corpus may overshoot the budget by up to one book.
    pub fn is_over_budget(&self) -> bool {
        self.total_words > self.max_words
    }

    /// Running word total across all accumulated blocks
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Number of accumulated blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if no blocks have been accumulated
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Writes the corpus to a directory, one numbered file per block
    ///
    /// Files are named `0.txt`, `1.txt`, … by position in discovery order,
    /// each containing exactly one block's trimmed text. An existing target
    /// directory is destroyed first (an overwrite, not a merge). Creation or
    /// write failures are fatal and propagate.
    pub fn save(&self, directory: &Path) -> Result<()> {
        if directory.exists() {
            fs::remove_dir_all(directory)?;
        }
        fs::create_dir_all(directory)?;

        for (index, block) in self.blocks.iter().enumerate() {
            let path = directory.join(format!("{}.txt", index));
            fs::write(path, block.text())?;
        }

        tracing::info!(
            "Saved {} blocks ({} words) to {}",
            self.blocks.len(),
            self.total_words,
            directory.display()
        );

        Ok(())
    }
}
