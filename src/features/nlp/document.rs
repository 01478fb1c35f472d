//! Document splitting.
//!
//! Input is split into paragraphs on blank lines. A paragraph holding a
//! fenced region (two or more backticks on each side) is a templated
//! [`Block`]; any other paragraph is a list of independent lines.

use crate::core::DateResolver;
use crate::error::TparseError;
use crate::features::nlp::block::Block;
use crate::features::nlp::delimiters::BLOCK_FENCE;
use crate::features::nlp::line::{Line, LineParser};

/// Options controlling how text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Pull a `when` date out of each title.
    pub extract_when: bool,
    /// Push a past `when` one week forward.
    pub roll_past_dates: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            extract_when: false,
            roll_past_dates: true,
        }
    }
}

/// Parses whole documents into [`Line`]s.
///
/// Holds no state between calls; one parser may serve many documents.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    lines: LineParser,
}

impl Parser {
    /// A parser resolving dates against `resolver`.
    #[must_use]
    pub fn new(resolver: DateResolver, options: ParserOptions) -> Self {
        let resolver = resolver.with_roll_past_dates(options.roll_past_dates);
        Self {
            lines: LineParser::new(resolver).with_when(options.extract_when),
        }
    }

    /// A parser resolving dates against the current time.
    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Self::new(DateResolver::now(), options)
    }

    /// The underlying line parser.
    #[must_use]
    pub const fn line_parser(&self) -> &LineParser {
        &self.lines
    }

    /// Parse a full document, preserving source order.
    ///
    /// Blocks emit their template line first, then each merged child.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Tokenizer` if a line cannot be tokenized.
    pub fn parse(&self, text: &str) -> Result<Vec<Line>, TparseError> {
        let text = text.replace("\r\n", "\n");
        let mut items = Vec::new();

        for paragraph in split_paragraphs(&text) {
            if let Some(body) = fenced_body(paragraph) {
                let mut lines = body.lines();
                let template = lines.next().unwrap_or_default();
                let block = Block::parse(&self.lines, template, lines)?;
                log::debug!("block {template:?} with {} line(s)", block.lines.len());
                items.extend(block.into_lines());
            } else {
                for sentence in paragraph.lines().filter(|l| !l.trim().is_empty()) {
                    items.push(Line::new(sentence, self.lines.parse_line(sentence)?));
                }
            }
        }

        Ok(items)
    }

    /// Parse a single line with no block context.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Tokenizer` if the line cannot be tokenized.
    pub fn parse_line(&self, line: &str) -> Result<Line, TparseError> {
        Ok(Line::new(line, self.lines.parse_line(line)?))
    }
}

/// Split text into paragraphs separated by one or more blank lines.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(&text[s..end]);
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.trim_end_matches('\n').len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        paragraphs.push(&text[s..end]);
    }

    paragraphs
}

/// The text between the first opening fence and the last closing fence.
///
/// Runs of backticks longer than the fence are consumed entirely, so both
/// ``` `` ``` and triple-backtick fences work. Blank edges are trimmed so
/// the template may sit on the fence line or on the line after it.
fn fenced_body(paragraph: &str) -> Option<&str> {
    let open = paragraph.find(BLOCK_FENCE)?;
    let close = paragraph.rfind(BLOCK_FENCE)?;
    if close <= open + 1 {
        return None;
    }

    let body_start = open + paragraph[open..].len() - paragraph[open..].trim_start_matches('`').len();
    let body_end = paragraph[..close + BLOCK_FENCE.len()].trim_end_matches('`').len();
    if body_end < body_start {
        return None;
    }

    let body = paragraph[body_start..body_end].trim_matches(|c| c == '\n' || c == '\r');
    Some(body)
}
