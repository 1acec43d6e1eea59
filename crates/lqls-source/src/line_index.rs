/// Byte offsets of the start of every line in a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<u32>,
    length: u32,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut pos: u32 = 0;

        for c in text.chars() {
            pos += u32::try_from(c.len_utf8()).unwrap_or(0);
            if c == '\n' {
                line_starts.push(pos);
            }
        }

        Self {
            line_starts,
            length: pos,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The text of line `line` (0-based) without its line terminator.
    #[must_use]
    pub fn line<'a>(&self, text: &'a str, line: u32) -> Option<&'a str> {
        let start = *self.line_starts.get(line as usize)? as usize;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .copied()
            .unwrap_or(self.length) as usize;

        let raw = text.get(start..end)?;
        Some(raw.strip_suffix('\n').map_or(raw, |rest| {
            rest.strip_suffix('\r').unwrap_or(rest)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_strip_terminators() {
        let text = "first\r\n{{ product.title }}\nlast";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line(text, 0), Some("first"));
        assert_eq!(index.line(text, 1), Some("{{ product.title }}"));
        assert_eq!(index.line(text, 2), Some("last"));
        assert_eq!(index.line(text, 3), None);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let text = "one\n";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line(text, 1), Some(""));
    }

    #[test]
    fn empty_document_has_one_empty_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line("", 0), Some(""));
    }
}
