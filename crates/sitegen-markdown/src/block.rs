//! Block splitting and classification.

/// Paragraph-level block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    OrderedList,
    UnorderedList,
}

impl BlockType {
    /// Classify a trimmed block of markdown.
    ///
    /// Checks run in precedence order; a block that enters a multi-line
    /// check (quote, lists) and fails it degrades to a paragraph rather
    /// than falling through to later checks. Near-miss markup is never an
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use sitegen_markdown::BlockType;
    ///
    /// assert_eq!(BlockType::classify("## Section"), BlockType::Heading);
    /// assert_eq!(BlockType::classify("1. a\n2. b"), BlockType::OrderedList);
    /// assert_eq!(BlockType::classify("1. a\n3. b"), BlockType::Paragraph);
    /// ```
    #[must_use]
    pub fn classify(block: &str) -> Self {
        if block.starts_with("```") && block.ends_with("```") {
            return Self::Code;
        }
        if block.starts_with('>') {
            if block.lines().all(|line| line.starts_with('>')) {
                return Self::Quote;
            }
            return Self::Paragraph;
        }
        if is_heading(block) {
            return Self::Heading;
        }
        if block.starts_with("- ") {
            if block.lines().all(|line| line.starts_with("- ")) {
                return Self::UnorderedList;
            }
            return Self::Paragraph;
        }
        if block.starts_with("1. ") {
            let sequential = block
                .lines()
                .enumerate()
                .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)));
            if sequential {
                return Self::OrderedList;
            }
            return Self::Paragraph;
        }
        Self::Paragraph
    }
}

/// One to six `#` characters followed by a space.
fn is_heading(block: &str) -> bool {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ')
}

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are separated by blank lines; runs of several blank lines produce
/// no empty blocks.
#[must_use]
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_blocks_basic_document() {
        let markdown = "# This is a heading

This is a paragraph of text. It has some **bold** and _italic_ words inside of it.

- This is the first list item in a list block
- This is a list item
- This is another list item";
        assert_eq!(
            split_blocks(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and _italic_ words inside of it.",
                "- This is the first list item in a list block\n- This is a list item\n- This is another list item",
            ]
        );
    }

    #[test]
    fn test_split_blocks_collapses_blank_line_runs() {
        assert_eq!(split_blocks("A\n\n\n\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_blocks_trims_surrounding_whitespace() {
        assert_eq!(split_blocks("  first  \n\n\tsecond\n"), vec!["first", "second"]);
    }

    #[test]
    fn test_split_blocks_empty_document() {
        assert_eq!(split_blocks(""), Vec::<&str>::new());
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(BlockType::classify("just some text"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_headings_by_level() {
        assert_eq!(BlockType::classify("# h1"), BlockType::Heading);
        assert_eq!(BlockType::classify("###### h6"), BlockType::Heading);
    }

    #[test]
    fn test_seven_hashes_is_a_paragraph() {
        assert_eq!(BlockType::classify("####### too deep"), BlockType::Paragraph);
    }

    #[test]
    fn test_hash_without_space_is_a_paragraph() {
        assert_eq!(BlockType::classify("#nospace"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_code_fence() {
        assert_eq!(BlockType::classify("```\nlet x = 1;\n```"), BlockType::Code);
    }

    #[test]
    fn test_unterminated_fence_is_a_paragraph() {
        assert_eq!(BlockType::classify("```\nlet x = 1;"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(BlockType::classify("> first\n> second"), BlockType::Quote);
    }

    #[test]
    fn test_quote_with_bare_line_degrades_to_paragraph() {
        assert_eq!(BlockType::classify("> quoted\nnot quoted"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(BlockType::classify("- one\n- two"), BlockType::UnorderedList);
    }

    #[test]
    fn test_unordered_list_with_bad_line_degrades_to_paragraph() {
        assert_eq!(BlockType::classify("- one\ntwo"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(BlockType::classify("1. a\n2. b\n3. c"), BlockType::OrderedList);
    }

    #[test]
    fn test_ordered_list_with_gap_degrades_to_paragraph() {
        assert_eq!(BlockType::classify("1. a\n3. b"), BlockType::Paragraph);
    }

    #[test]
    fn test_ordered_list_not_starting_at_one_is_a_paragraph() {
        assert_eq!(BlockType::classify("2. a\n3. b"), BlockType::Paragraph);
    }

    #[test]
    fn test_quote_precedes_heading() {
        // A quote whose first line quotes a heading is still a quote
        assert_eq!(BlockType::classify("> # quoted heading"), BlockType::Quote);
    }
}
