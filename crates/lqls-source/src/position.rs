/// A line and column position within a text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    line: u32,
    column: u32,
}

impl LineCol {
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }
}

/// The unit an editor uses to count columns within a line.
///
/// LSP clients speak UTF-16 unless they negotiate something else, while the
/// template locator works in characters. These conversions bridge the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionEncoding {
    Utf8,
    #[default]
    Utf16,
    Utf32,
}

impl PositionEncoding {
    /// Convert an editor column within `line` to a character offset.
    ///
    /// A column at the end of the line maps to the line's character count and
    /// a column past it yields `None`. A column landing inside a multi-unit
    /// character resolves to that character.
    #[must_use]
    pub fn column_to_char_offset(self, line: &str, column: u32) -> Option<usize> {
        let column = column as usize;
        let mut units = 0;

        for (index, ch) in line.chars().enumerate() {
            if units >= column {
                return Some(index);
            }
            units += self.width(ch);
            if units > column {
                return Some(index);
            }
        }

        (units == column).then(|| line.chars().count())
    }

    /// Convert a character offset within `line` to an editor column.
    #[must_use]
    pub fn char_offset_to_column(self, line: &str, offset: usize) -> u32 {
        let units: usize = line.chars().take(offset).map(|ch| self.width(ch)).sum();
        u32::try_from(units).unwrap_or(u32::MAX)
    }

    fn width(self, ch: char) -> usize {
        match self {
            PositionEncoding::Utf8 => ch.len_utf8(),
            PositionEncoding::Utf16 => ch.len_utf16(),
            PositionEncoding::Utf32 => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_columns_are_identity() {
        let line = "{{ product.title }}";
        for encoding in [
            PositionEncoding::Utf8,
            PositionEncoding::Utf16,
            PositionEncoding::Utf32,
        ] {
            assert_eq!(encoding.column_to_char_offset(line, 5), Some(5));
            assert_eq!(encoding.char_offset_to_column(line, 5), 5);
        }
    }

    #[test]
    fn utf16_counts_surrogate_pairs() {
        // 🛒 is two UTF-16 units and four UTF-8 bytes
        let line = "🛒 {{ cart }}";
        assert_eq!(PositionEncoding::Utf16.column_to_char_offset(line, 3), Some(2));
        assert_eq!(PositionEncoding::Utf16.char_offset_to_column(line, 2), 3);
        assert_eq!(PositionEncoding::Utf8.column_to_char_offset(line, 5), Some(2));
        assert_eq!(PositionEncoding::Utf32.column_to_char_offset(line, 2), Some(2));
    }

    #[test]
    fn column_at_end_maps_to_line_length() {
        let line = "abc";
        assert_eq!(PositionEncoding::Utf16.column_to_char_offset(line, 3), Some(3));
        assert_eq!(PositionEncoding::Utf8.column_to_char_offset("", 0), Some(0));
    }

    #[test]
    fn column_past_end_is_none() {
        let line = "abc";
        assert_eq!(PositionEncoding::Utf16.column_to_char_offset(line, 4), None);
        assert_eq!(PositionEncoding::Utf16.column_to_char_offset(line, 99), None);
        // 🛒 is four UTF-8 bytes
        assert_eq!(PositionEncoding::Utf8.column_to_char_offset("🛒", 5), None);
    }

    #[test]
    fn default_is_utf16() {
        assert_eq!(PositionEncoding::default(), PositionEncoding::Utf16);
    }
}
