//! Markdown to block parser
//!
//! Scans a document line by line. Fence openers from the dialect table
//! start a new block of the mapped language; a bare closing fence inside a
//! code block returns to prose. Fence lines themselves are dropped. Text
//! inside a code block is never reinterpreted, so nested fences are not
//! supported.

use serde::Serialize;

use super::{Block, Dialect, Language, Line, CLOSING_FENCE};

/// A document split into non-empty blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub blocks: Vec<Block>,

    /// Original text, kept for diagnostics
    #[serde(skip)]
    pub raw: String,
}

impl ParsedDocument {
    /// Parses `content` into blocks, starting in `starting` language
    pub fn parse(content: &str, dialect: Dialect, starting: Language) -> Self {
        let mut blocks = vec![Block::new(starting)];

        for (number, text) in content.split_inclusive('\n').enumerate() {
            if let Some(language) = dialect.opening_fence(text) {
                blocks.push(Block::new(language));
                continue;
            }

            // `blocks` always holds at least the starting block
            let current = blocks.len() - 1;
            if text.trim() == CLOSING_FENCE && !blocks[current].language.is_prose() {
                blocks.push(Block::new(Language::Prose));
                continue;
            }

            blocks[current].append(Line::new(number, text));
        }

        blocks.retain(|block| !block.is_empty());

        Self {
            blocks,
            raw: content.to_string(),
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
