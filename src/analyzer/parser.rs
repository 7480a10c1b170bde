use std::collections::VecDeque;

use tracing::trace;

use super::core::Grammar;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{Lexer, Token};

const UNEXPECTED_TOKEN: &str = "Unexpected token";
const UNEXPECTED_EOF: &str = "Unexpected end of file";

/// One-token-lookahead cursor over a lexed token stream.
///
/// The cursor has two observable slots: [`token`](Parser::token), the last
/// accepted token, and [`next`](Parser::next), the lookahead. The only
/// transition between them is a successful [`accept`](Parser::accept), which
/// commits `next` into `token` and pulls the following pending token into
/// `next`. There is no way to un-accept a token; grammars that need to look
/// further ahead re-inject tokens with [`push_tokens`](Parser::push_tokens).
///
/// A parser borrows its [`Lexer`] and can be reused for any number of
/// [`parse`](Parser::parse) calls. Each call starts from a fresh cursor.
#[derive(Debug)]
pub struct Parser<'lx, K> {
    lexer: &'lx Lexer<K>,
    text: String,
    tokens: VecDeque<Token<K>>,
    token: Option<Token<K>>,
    next: Option<Token<K>>,
}

impl<'lx, K> Parser<'lx, K> {
    pub fn new(lexer: &'lx Lexer<K>) -> Self {
        Self {
            lexer,
            text: String::new(),
            tokens: VecDeque::new(),
            token: None,
            next: None,
        }
    }

    /// Source text of the current (or last) parse.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last accepted token.
    pub fn token(&self) -> Option<&Token<K>> {
        self.token.as_ref()
    }

    /// Lookahead token, `None` once the stream is exhausted.
    pub fn next(&self) -> Option<&Token<K>> {
        self.next.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Number of tokens queued behind the lookahead.
    pub fn pending(&self) -> usize {
        self.tokens.len()
    }

    /// Replaces the lookahead with the following pending token.
    pub fn gettok(&mut self) {
        self.next = self.tokens.pop_front();
    }

    /// Splices `tokens` in front of the remaining stream.
    ///
    /// The injected tokens are consumed first, in the order given, then the
    /// previous lookahead, then the rest of the stream. The lookahead is
    /// re-primed from the spliced sequence, so if `tokens` is empty the
    /// previous lookahead is reinstated unchanged.
    pub fn push_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token<K>>,
        I::IntoIter: DoubleEndedIterator,
    {
        if let Some(next) = self.next.take() {
            self.tokens.push_front(next);
        }
        let before = self.tokens.len();
        for token in tokens.into_iter().rev() {
            self.tokens.push_front(token);
        }
        trace!(injected = self.tokens.len() - before, "tokens pushed");
        self.gettok();
    }

    /// Accepts the lookahead if it is of `kind`.
    ///
    /// On a match the lookahead becomes [`token`](Parser::token), the stream
    /// advances and `true` is returned. Otherwise the cursor is left untouched.
    pub fn accept(&mut self, kind: &K) -> bool
    where
        K: PartialEq,
    {
        if !self.next.as_ref().is_some_and(|next| next.is_a(kind)) {
            return false;
        }
        self.token = self.next.take();
        self.gettok();
        trace!(
            start = self.last_start(),
            end = self.last_end(),
            "token accepted"
        );
        true
    }

    /// Like [`accept`](Parser::accept), but a mismatch is a [`ParseError`].
    ///
    /// The error reads "Unexpected token" when a lookahead of another kind is
    /// present and "Unexpected end of file" when the stream is exhausted; both
    /// point at the end of the last accepted token.
    pub fn expect(&mut self, kind: &K) -> ParseResult<&Token<K>>
    where
        K: PartialEq,
    {
        if self.accept(kind) {
            if let Some(token) = &self.token {
                return Ok(token);
            }
        }
        if self.next.is_some() {
            Err(self.unexpected_token())
        } else {
            Err(self.next_token_error(UNEXPECTED_EOF))
        }
    }

    pub fn unexpected_token(&self) -> ParseError {
        self.next_token_error(UNEXPECTED_TOKEN)
    }

    /// An error pointing just past the last accepted token, i.e. at whatever
    /// comes next.
    pub fn next_token_error<M: Into<String>>(&self, message: M) -> ParseError {
        ParseError::syntax(message, self.text.as_str(), self.last_end())
    }

    /// An error pointing at the start of the last accepted token.
    pub fn last_token_error<M: Into<String>>(&self, message: M) -> ParseError {
        ParseError::syntax(message, self.text.as_str(), self.last_start())
    }

    // Before anything is accepted both positions fall back to the start of
    // the text.
    fn last_end(&self) -> usize {
        self.token.as_ref().map_or(0, Token::end)
    }

    fn last_start(&self) -> usize {
        self.token.as_ref().map_or(0, Token::start)
    }

    fn reset(&mut self, text: &str) {
        self.text = text.to_string();
        self.tokens.clear();
        self.token = None;
        self.next = None;
    }
}

impl<K: Clone> Parser<'_, K> {
    /// Lexes `text`, primes the lookahead and runs `grammar` against the cursor.
    ///
    /// Lex errors and whatever the grammar returns propagate unchanged.
    #[tracing::instrument(level = "debug", skip(self, text, grammar), fields(len = text.len()))]
    pub fn parse<G>(&mut self, text: &str, grammar: &mut G) -> ParseResult<G::Output>
    where
        G: Grammar<K>,
    {
        self.reset(text);
        let tokens = self.lexer.lex(text)?;
        self.push_tokens(tokens);
        grammar.do_parse(self)
    }
}
