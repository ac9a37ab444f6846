use crate::normalize::normalize_into;

/// Split a normalized line into tokens.
///
/// Runs of spaces never produce empty tokens. The iterator borrows `normalized` and holds no
/// other state, so it can be recreated at will.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> + Clone + '_ {
    normalized.split(' ').filter(|token| !token.is_empty())
}

/// Normalize and split a raw line into owned tokens.
pub fn tokenize_line(line: &[u8]) -> Vec<String> {
    let mut tokenizer = LineTokenizer::new();
    let mut out = Vec::new();
    tokenizer.for_each_token(line, |token| out.push(token.to_owned()));
    out
}

/// Per-owner tokenizer that keeps its normalization buffer between lines.
///
/// Each counting unit (the sequential loop, or one parallel worker) owns exactly one.
#[derive(Debug, Default)]
pub struct LineTokenizer {
    scratch: String,
}

impl LineTokenizer {
    /// Create a tokenizer with an empty scratch buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `line` and call `f` once per token, in order. Returns the token count.
    pub fn for_each_token<F>(&mut self, line: &[u8], mut f: F) -> u64
    where
        F: FnMut(&str),
    {
        normalize_into(line, &mut self.scratch);
        let mut seen = 0;
        for token in tokens(&self.scratch) {
            f(token);
            seen += 1;
        }
        seen
    }
}
