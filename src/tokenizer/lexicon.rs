//! # Lexicon
//!
//! An ordered list of `(pattern, action)` rules describing how raw text is cut
//! into tokens. Rule order is the tie-break: at each scan position the first
//! rule whose pattern matches a non-empty prefix wins, even if a later rule
//! would match more text.
//!
//! ```
//! use rdparse::tokenizer::lexicon::Lexicon;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Kind { Number, Plus }
//!
//! let lexicon = Lexicon::new()
//!     .token(r"\d+", Kind::Number)
//!     .token(r"\+", Kind::Plus)
//!     .skip(r"\s+");
//! assert_eq!(lexicon.len(), 3);
//! ```

use std::fmt;

/// Callback invoked with the matched text. `None` drops the match.
pub type RuleCallback<K> = Box<dyn Fn(&str) -> Option<(K, String)> + Send + Sync>;

/// What the lexer does with the text a rule matched.
pub enum Action<K> {
    /// Emit a token of this kind whose value is the matched text.
    Emit(K),
    /// Emit nothing but advance past the match.
    Skip,
    /// Let the caller pick the kind and payload.
    Callback(RuleCallback<K>),
}

impl<K: fmt::Debug> fmt::Debug for Action<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Emit(kind) => f.debug_tuple("Emit").field(kind).finish(),
            Action::Skip => f.write_str("Skip"),
            Action::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

#[derive(Debug)]
pub struct Rule<K> {
    pub pattern: String,
    pub action: Action<K>,
}

#[derive(Debug)]
pub struct Lexicon<K> {
    rules: Vec<Rule<K>>,
    case_insensitive: bool,
}

impl<K> Default for Lexicon<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Lexicon<K> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            case_insensitive: false,
        }
    }

    pub fn rule<P: Into<String>>(mut self, pattern: P, action: Action<K>) -> Self {
        self.rules.push(Rule {
            pattern: pattern.into(),
            action,
        });
        self
    }

    pub fn token<P: Into<String>>(self, pattern: P, kind: K) -> Self {
        self.rule(pattern, Action::Emit(kind))
    }

    pub fn skip<P: Into<String>>(self, pattern: P) -> Self {
        self.rule(pattern, Action::Skip)
    }

    pub fn callback<P, F>(self, pattern: P, f: F) -> Self
    where
        P: Into<String>,
        F: Fn(&str) -> Option<(K, String)> + Send + Sync + 'static,
    {
        self.rule(pattern, Action::Callback(Box::new(f)))
    }

    /// Match every pattern regardless of letter case.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn rules(&self) -> &[Rule<K>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn into_rules(self) -> Vec<Rule<K>> {
        self.rules
    }
}

impl<K, P: Into<String>> FromIterator<(P, Action<K>)> for Lexicon<K> {
    fn from_iter<I: IntoIterator<Item = (P, Action<K>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Lexicon::new(), |lexicon, (pattern, action)| {
                lexicon.rule(pattern, action)
            })
    }
}
