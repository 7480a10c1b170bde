#![allow(dead_code)]

use std::collections::HashMap;

use lazy_static::lazy_static;
use rdparse::{Grammar, Lexer, Lexicon, ParseResult, Parser, Token};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calc {
    Number,
    Ident,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

lazy_static! {
    pub static ref CALC_LEXER: Lexer<Calc> = Lexer::new(
        Lexicon::new()
            .token(r"\d+", Calc::Number)
            .token(r"[A-Za-z_][A-Za-z0-9_]*", Calc::Ident)
            .token(r"\+", Calc::Plus)
            .token(r"-", Calc::Minus)
            .token(r"\*", Calc::Star)
            .token(r"/", Calc::Slash)
            .token(r"\(", Calc::LParen)
            .token(r"\)", Calc::RParen)
            .skip(r"\s+")
            .skip(r"#[^\n]*"),
    )
    .expect("calculator lexicon compiles");
}

/// Integer calculator grammar.
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := NUMBER | '-' factor | '(' expr ')' | IDENT
/// ```
///
/// An identifier is looked up in `aliases` and its expansion is spliced into
/// the token stream in its place.
#[derive(Debug, Default)]
pub struct Calculator {
    aliases: HashMap<String, Vec<(Calc, String)>>,
    pub expansions: usize,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, name: &str, expansion: &[(Calc, &str)]) -> Self {
        self.aliases.insert(
            name.to_string(),
            expansion
                .iter()
                .map(|(kind, value)| (*kind, value.to_string()))
                .collect(),
        );
        self
    }

    fn expr(&mut self, parser: &mut Parser<'_, Calc>) -> ParseResult<i64> {
        let mut value = self.term(parser)?;
        loop {
            if parser.accept(&Calc::Plus) {
                value += self.term(parser)?;
            } else if parser.accept(&Calc::Minus) {
                value -= self.term(parser)?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self, parser: &mut Parser<'_, Calc>) -> ParseResult<i64> {
        let mut value = self.factor(parser)?;
        loop {
            if parser.accept(&Calc::Star) {
                value *= self.factor(parser)?;
            } else if parser.accept(&Calc::Slash) {
                let divisor = self.factor(parser)?;
                if divisor == 0 {
                    return Err(parser.last_token_error("Division by zero"));
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    fn factor(&mut self, parser: &mut Parser<'_, Calc>) -> ParseResult<i64> {
        if parser.accept(&Calc::Number) {
            let token = parser.token().map(Token::value).unwrap_or_default();
            return token
                .parse()
                .map_err(|_| parser.last_token_error("Number out of range"));
        }
        if parser.accept(&Calc::Minus) {
            return Ok(-self.factor(parser)?);
        }
        if parser.accept(&Calc::LParen) {
            let value = self.expr(parser)?;
            parser.expect(&Calc::RParen)?;
            return Ok(value);
        }
        if parser.accept(&Calc::Ident) {
            let Some(name) = parser.token().cloned() else {
                return Err(parser.unexpected_token());
            };
            let Some(expansion) = self.aliases.get(name.value()) else {
                return Err(parser.last_token_error(format!("Unknown name {}", name)));
            };
            let tokens: Vec<_> = expansion
                .iter()
                .map(|(kind, value)| Token::new(*kind, value.as_str(), name.start(), name.end()))
                .collect();
            self.expansions += 1;
            parser.push_tokens(tokens);
            return self.factor(parser);
        }
        match parser.next() {
            Some(_) => Err(parser.unexpected_token()),
            None => Err(parser.next_token_error("Unexpected end of file")),
        }
    }
}

impl Grammar<Calc> for Calculator {
    type Output = i64;

    fn do_parse(&mut self, parser: &mut Parser<'_, Calc>) -> ParseResult<i64> {
        let value = self.expr(parser)?;
        if !parser.is_exhausted() {
            return Err(parser.unexpected_token());
        }
        Ok(value)
    }
}

pub fn evaluate(text: &str) -> ParseResult<i64> {
    Parser::new(&CALC_LEXER).parse(text, &mut Calculator::new())
}
