#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A candidate note name such as `E`, `C#` or `Db`. Validated later.
    Word(String),
    Comma,
    EOF,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}
