//! Blocks of same-language lines

use serde::Serialize;

use super::Language;

/// One physical line of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// 0-based position in the source file
    pub number: usize,

    /// Line text, including its trailing newline when present
    pub content: String,
}

impl Line {
    pub fn new(number: usize, content: impl Into<String>) -> Self {
        Self {
            number,
            content: content.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A contiguous run of lines sharing one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub language: Language,
    pub lines: Vec<Line>,
}

impl Block {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            lines: Vec::new(),
        }
    }

    /// Appends a line, returning the block for chaining
    pub fn append(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Line contents joined with `\n`
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True if the block has no lines or only whitespace lines
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_blank)
    }

    /// Renders this block as one notebook command cell
    ///
    /// `comment` is the host language's comment prefix; it escapes every
    /// emitted line while the magic directive keeps the block's own tag.
    pub fn render(&self, comment: &str) -> String {
        let magic_lines: String = self
            .lines
            .iter()
            .map(|line| format!("{} MAGIC {}", comment, line.content))
            .collect();

        [
            format!("{} COMMAND ----------", comment),
            String::new(),
            format!("{} MAGIC %{}", comment, self.language.magic_tag()),
            magic_lines,
            String::new(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_chains() {
        let mut block = Block::new(Language::Python);
        block
            .append(Line::new(0, "x = 1\n"))
            .append(Line::new(1, "y = 2\n"));

        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[1].number, 1);
    }

    #[test]
    fn content_joins_with_newline() {
        let mut block = Block::new(Language::Sql);
        block.append(Line::new(3, "select 1")).append(Line::new(4, "from t"));

        assert_eq!(block.content(), "select 1\nfrom t");
    }

    #[test]
    fn empty_block_detection() {
        let mut block = Block::new(Language::Prose);
        assert!(block.is_empty());

        block.append(Line::new(0, "   \n")).append(Line::new(1, "\t\n"));
        assert!(block.is_empty());

        block.append(Line::new(2, "text\n"));
        assert!(!block.is_empty());
    }

    #[test]
    fn render_uses_host_comment_and_block_tag() {
        let mut block = Block::new(Language::Sql);
        block.append(Line::new(1, "select 1\n"));

        assert_eq!(
            block.render("//"),
            "// COMMAND ----------\n\n// MAGIC %sql\n// MAGIC select 1\n\n"
        );
    }

    #[test]
    fn render_concatenates_lines_without_separator() {
        let mut block = Block::new(Language::Prose);
        block.append(Line::new(0, "a\n")).append(Line::new(1, "b"));

        assert_eq!(
            block.render("#"),
            "# COMMAND ----------\n\n# MAGIC %md\n# MAGIC a\n# MAGIC b\n"
        );
    }
}
