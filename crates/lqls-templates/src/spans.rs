use lqls_source::Span;
use serde::Serialize;

const OUTPUT_START: &str = "{{";
const OUTPUT_END: &str = "}}";
const TAG_START: &str = "{%";
const TAG_END: &str = "%}";
const DELIMITER_LEN: usize = 2;
const WHITESPACE_CONTROL: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    /// `{{ … }}`
    Output,
    /// `{% … %}`
    Tag,
}

impl SpanKind {
    fn closer(self) -> &'static str {
        match self {
            SpanKind::Output => OUTPUT_END,
            SpanKind::Tag => TAG_END,
        }
    }
}

/// A template expression located on a single line.
///
/// All offsets are character offsets into the line the span was found on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExpressionSpan {
    kind: SpanKind,
    span: Span,
    content: String,
    content_start: usize,
}

impl ExpressionSpan {
    #[must_use]
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Bounds of the whole expression, delimiters included.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Offset of the first character of the opening delimiter.
    #[must_use]
    pub fn start(&self) -> usize {
        self.span.start_usize()
    }

    /// Offset one past the last character of the closing delimiter.
    #[must_use]
    pub fn end(&self) -> usize {
        self.span.end_usize()
    }

    /// The trimmed text between the delimiters, whitespace-control dashes removed.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Offset in the line at which [`content`](Self::content) begins.
    #[must_use]
    pub fn content_start(&self) -> usize {
        self.content_start
    }

    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.span.contains(offset)
    }

    /// Map a byte range inside [`content`](Self::content) to a line span.
    pub(crate) fn content_span(&self, byte_start: usize, byte_len: usize) -> Span {
        let start = char_count(&self.content[..byte_start]);
        let length = char_count(&self.content[byte_start..byte_start + byte_len]);
        Span::from_parts(self.content_start + start, length)
    }

    /// Build a span from byte positions in `line`: the opener at `open`, the
    /// inner text `inner_start..inner_end`, the closer ending at `close_end`.
    fn from_line(
        line: &str,
        kind: SpanKind,
        open: usize,
        inner_start: usize,
        inner_end: usize,
        close_end: usize,
    ) -> Self {
        let inner = &line[inner_start..inner_end];
        let without_left = inner.strip_prefix(WHITESPACE_CONTROL).unwrap_or(inner);
        let stripped = without_left
            .strip_suffix(WHITESPACE_CONTROL)
            .unwrap_or(without_left);
        let content = stripped.trim();

        let leading = (inner.len() - without_left.len()) + (stripped.len() - stripped.trim_start().len());
        let content_byte_start = inner_start + leading;

        let start = char_count(&line[..open]);
        let length = char_count(&line[open..close_end]);

        Self {
            kind,
            span: Span::from_parts(start, length),
            content: content.to_string(),
            content_start: start + char_count(&line[open..content_byte_start]),
        }
    }
}

/// Scan `line` left to right for `{{ … }}` and `{% … %}` expressions.
///
/// Whichever opener comes first is matched with the first following closer of
/// the same kind. An opener with no closer on the line is skipped and scanning
/// resumes right after it. Stray closers are ignored. Never fails.
#[must_use]
pub fn find_expression_spans(line: &str) -> Vec<ExpressionSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some((open, kind)) = next_opener(line, cursor) {
        let inner_start = open + DELIMITER_LEN;

        match line[inner_start..].find(kind.closer()) {
            Some(relative_end) => {
                let inner_end = inner_start + relative_end;
                let close_end = inner_end + DELIMITER_LEN;
                spans.push(ExpressionSpan::from_line(
                    line,
                    kind,
                    open,
                    inner_start,
                    inner_end,
                    close_end,
                ));
                cursor = close_end;
            }
            None => cursor = inner_start,
        }
    }

    spans
}

/// The span containing `offset`, inclusive of both ends.
///
/// When two spans touch (`{{ a }}{{ b }}`) the shared boundary belongs to the
/// left one.
#[must_use]
pub fn span_at(line: &str, offset: usize) -> Option<ExpressionSpan> {
    find_expression_spans(line)
        .into_iter()
        .find(|span| span.contains(offset))
}

fn next_opener(line: &str, from: usize) -> Option<(usize, SpanKind)> {
    let rest = &line[from..];
    let output = rest.find(OUTPUT_START).map(|i| (from + i, SpanKind::Output));
    let tag = rest.find(TAG_START).map(|i| (from + i, SpanKind::Tag));

    match (output, tag) {
        (Some(output), Some(tag)) => Some(if output.0 <= tag.0 { output } else { tag }),
        (output, tag) => output.or(tag),
    }
}

pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}
