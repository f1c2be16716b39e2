/// Rendering state threaded through every [`LiteralWriter`](super::LiteralWriter) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Delimiter wrapping string-like literals, doubled when found inside them.
    pub quote: char,
    /// Number of placeholders substituted so far.
    pub counter: u32,
}

impl Context {
    pub fn new(quote: char) -> Self {
        Self { quote, counter: 0 }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new('\'')
    }
}
