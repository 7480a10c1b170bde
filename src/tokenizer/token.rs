use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// A classified, positioned fragment of source text.
///
/// Tokens are produced by the [`Lexer`](super::lexer::Lexer) and only read
/// afterwards. `start` and `end` are byte offsets into the lexed text; grammars
/// that inject tokens through
/// [`Parser::push_tokens`](crate::analyzer::parser::Parser::push_tokens) pick
/// whatever offsets suit their diagnostics.
///
/// Equality and ordering look at `(kind, value)` only, so a token injected by a
/// grammar compares equal to a lexed one with the same kind and text.
#[derive(Debug, Clone)]
pub struct Token<K> {
    kind: K,
    value: String,
    start: usize,
    end: usize,
}

impl<K> Token<K> {
    pub fn new<V: Into<String>>(kind: K, value: V, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token ends before it starts");
        Self {
            kind,
            value: value.into(),
            start,
            end,
        }
    }

    /// A token with an empty value and zero-width position.
    pub fn bare(kind: K) -> Self {
        Self::new(kind, "", 0, 0)
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl<K: PartialEq> Token<K> {
    pub fn is_a(&self, kind: &K) -> bool {
        self.kind == *kind
    }
}

impl<K> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.value)
    }
}

impl<K: PartialEq> PartialEq for Token<K> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl<K: Eq> Eq for Token<K> {}

impl<K: PartialOrd> PartialOrd for Token<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.kind.partial_cmp(&other.kind)? {
            Ordering::Equal => Some(self.value.cmp(&other.value)),
            ordering => Some(ordering),
        }
    }
}

impl<K: Ord> Ord for Token<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.value.cmp(&other.value))
    }
}
