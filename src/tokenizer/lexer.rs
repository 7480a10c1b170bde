use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use super::lexicon::{Action, Lexicon};
use super::token::Token;
use crate::error::{LexResult, LexiconError, ParseError};

const INVALID_CHARACTER: &str = "Invalid character";

#[derive(Debug)]
struct CompiledRule<K> {
    regex: Regex,
    action: Action<K>,
}

/// A compiled lexicon.
///
/// Every pattern is compiled once and the compiled rules are only read by
/// [`Lexer::lex`]. A lexer can therefore be shared by any number of
/// [`Parser`](crate::analyzer::parser::Parser)s, across threads as long as the
/// kind type allows it.
#[derive(Debug)]
pub struct Lexer<K> {
    rules: Vec<CompiledRule<K>>,
}

impl<K> Lexer<K> {
    pub fn new(lexicon: Lexicon<K>) -> Result<Self, LexiconError> {
        if lexicon.is_empty() {
            return Err(LexiconError::Empty);
        }

        let case_insensitive = lexicon.is_case_insensitive();
        let rules = lexicon
            .into_rules()
            .into_iter()
            .enumerate()
            .map(|(index, rule)| -> Result<CompiledRule<K>, LexiconError> {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(case_insensitive)
                    .build()
                    .map_err(|source| LexiconError::InvalidPattern {
                        index,
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Ok(CompiledRule {
                    regex,
                    action: rule.action,
                })
            })
            .collect::<Result<Vec<_>, LexiconError>>()?;

        debug!(rules = rules.len(), "lexicon compiled");
        Ok(Self { rules })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// First rule with a non-empty match starting exactly at `pos`, with the
    /// match end.
    ///
    /// Patterns run against the whole text so that `\b`, `(?m)^` and friends
    /// see the characters before `pos`. Leftmost-first search returns a match
    /// at `pos` whenever one exists there.
    fn match_at(&self, text: &str, pos: usize) -> Option<(&CompiledRule<K>, usize)> {
        self.rules.iter().find_map(|rule| {
            rule.regex
                .find_at(text, pos)
                .filter(|m| m.start() == pos && !m.is_empty())
                .map(|m| (rule, m.end()))
        })
    }
}

impl<K: Clone> Lexer<K> {
    /// Splits `text` into tokens.
    ///
    /// Scanning is all-or-nothing: either every byte of `text` is covered by a
    /// token or a skip rule, or a [`ParseError::Lex`] is returned whose `pos`
    /// is the offset of the first character no rule matches.
    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn lex(&self, text: &str) -> LexResult<Vec<Token<K>>> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some((rule, end)) = self.match_at(text, pos) else {
                debug!(pos, "no lexicon rule matches");
                return Err(ParseError::lex(INVALID_CHARACTER, text, pos));
            };
            let matched = &text[pos..end];

            match &rule.action {
                Action::Emit(kind) => tokens.push(Token::new(kind.clone(), matched, pos, end)),
                Action::Skip => trace!(pos, end, "skipped"),
                Action::Callback(f) => {
                    if let Some((kind, value)) = f(matched) {
                        tokens.push(Token::new(kind, value, pos, end));
                    }
                }
            }
            pos = end;
        }

        debug!(tokens = tokens.len(), "lexed");
        Ok(tokens)
    }
}
