/// Run of `len` pixels starting at column `x`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x: i64,
    pub len: i64,
}

impl Span {
    /// First column after the span
    pub fn end(&self) -> i64 {
        self.x.saturating_add(self.len)
    }
}

/// Spans covered on a single row `y`
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Scanline {
    pub y: i64,
    pub spans: Vec<Span>,
}

impl Scanline {
    pub fn new(y: i64) -> Self {
        Self { y, spans: vec![] }
    }
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
    /// Total number of pixels over all spans
    pub fn pixel_count(&self) -> i64 {
        self.spans.iter().map(|s| s.len).sum()
    }
    /// Check if column `x` is covered
    pub fn contains(&self, x: i64) -> bool {
        self.spans.iter().any(|s| x >= s.x && x < s.end())
    }
    /// Add the columns `x1 .. x2`, right end exclusive
    ///
    /// Empty ranges are ignored. A span starting where the previous
    ///   one ends extends it.
    pub fn add_span(&mut self, x1: i64, x2: i64) {
        if x2 <= x1 {
            return;
        }
        let len = x2.saturating_sub(x1);
        if let Some(cur) = self.spans.last_mut() {
            if cur.end() == x1 {
                cur.len = cur.len.saturating_add(len);
                return;
            }
        }
        self.spans.push(Span { x: x1, len });
    }
}
