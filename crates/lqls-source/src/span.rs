use serde::Serialize;

/// A range of character offsets within a single line of text.
///
/// Offsets count Unicode scalar values, not bytes, so a span computed on a line
/// containing multibyte text can be handed straight to an editor once it has
/// been converted with [`PositionEncoding`](crate::PositionEncoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: u32,
    length: u32,
}

impl Span {
    #[must_use]
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub fn from_parts(start: usize, length: usize) -> Self {
        let start_u32 = u32::try_from(start).unwrap_or(u32::MAX);
        let length_u32 = u32::try_from(length).unwrap_or(u32::MAX.saturating_sub(start_u32));
        Span::new(start_u32, length_u32)
    }

    /// Construct a span from a start offset and an exclusive end offset.
    #[must_use]
    pub fn from_bounds(start: usize, end: usize) -> Self {
        Self::from_parts(start, end.saturating_sub(start))
    }

    #[must_use]
    pub fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn start_usize(self) -> usize {
        self.start as usize
    }

    #[must_use]
    pub fn end(self) -> u32 {
        self.start.saturating_add(self.length)
    }

    #[must_use]
    pub fn end_usize(self) -> usize {
        self.end() as usize
    }

    #[must_use]
    pub fn length(self) -> u32 {
        self.length
    }

    /// Shift the span right by `delta` characters.
    #[must_use]
    pub fn offset_by(self, delta: usize) -> Self {
        Self::from_parts(self.start_usize().saturating_add(delta), self.length as usize)
    }

    /// Whether `offset` lies within `[start, end]`, inclusive on both ends.
    ///
    /// A cursor sitting directly after the last character of a span still
    /// counts as being on it.
    #[must_use]
    pub fn contains(self, offset: usize) -> bool {
        offset >= self.start_usize() && offset <= self.end_usize()
    }
}
