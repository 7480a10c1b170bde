//! Property-based tests for the parser cursor protocol.

use crate::analyzer::{Grammar, ParseResult, Parser};
use crate::tokenizer::{Lexer, Lexicon, Token};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Number,
}

fn lexer() -> Lexer<Kind> {
    Lexer::new(
        Lexicon::new()
            .token(r"[a-z]+", Kind::Word)
            .token(r"\d+", Kind::Number)
            .skip(r"\s+"),
    )
    .unwrap()
}

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Word), Just(Kind::Number)]
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof!["[a-z]{1,5}", "[0-9]{1,3}"], 0..12)
}

/// Leaves the primed cursor for the test to drive.
struct Primed;

impl Grammar<Kind> for Primed {
    type Output = ();

    fn do_parse(&mut self, _parser: &mut Parser<'_, Kind>) -> ParseResult<()> {
        Ok(())
    }
}

/// Drains the stream, returning the accepted values in order.
fn drain(parser: &mut Parser<'_, Kind>) -> Vec<String> {
    let mut values = Vec::new();
    while parser.accept(&Kind::Word) || parser.accept(&Kind::Number) {
        values.push(parser.token().map(|t| t.value().to_string()).unwrap_or_default());
    }
    values
}

proptest! {
    #[test]
    fn test_failed_accept_is_side_effect_free(words in words_strategy(), kinds in prop::collection::vec(kind_strategy(), 1..8)) {
        let lexer = lexer();
        let mut parser = Parser::new(&lexer);
        parser.parse(&words.join(" "), &mut Primed).unwrap();

        for kind in kinds {
            let token = parser.token().map(|t| (t.value().to_string(), t.span()));
            let next = parser.next().map(|t| (t.value().to_string(), t.span()));
            let pending = parser.pending();

            if parser.accept(&kind) {
                let accepted = parser.token().unwrap();
                prop_assert_eq!(*accepted.kind(), kind);
                prop_assert_eq!(Some((accepted.value().to_string(), accepted.span())), next);
            } else {
                prop_assert_eq!(parser.token().map(|t| (t.value().to_string(), t.span())), token);
                prop_assert_eq!(parser.next().map(|t| (t.value().to_string(), t.span())), next);
                prop_assert_eq!(parser.pending(), pending);
            }
        }
    }

    #[test]
    fn test_accepting_everything_yields_lexed_order(words in words_strategy()) {
        let lexer = lexer();
        let mut parser = Parser::new(&lexer);
        parser.parse(&words.join(" "), &mut Primed).unwrap();

        prop_assert_eq!(drain(&mut parser), words);
        prop_assert!(parser.is_exhausted());
    }

    #[test]
    fn test_push_tokens_consumed_before_lookahead(
        words in words_strategy(),
        skip in 0usize..12,
        injected in prop::collection::vec("[a-z]{1,5}", 0..6)
    ) {
        let lexer = lexer();
        let mut parser = Parser::new(&lexer);
        parser.parse(&words.join(" "), &mut Primed).unwrap();

        let consumed = drain_n(&mut parser, skip);
        parser.push_tokens(injected.iter().map(|w| Token::new(Kind::Word, w.as_str(), 0, 0)));

        let mut expected = injected.clone();
        expected.extend(words.iter().skip(consumed).cloned());
        prop_assert_eq!(drain(&mut parser), expected);
    }
}

fn drain_n(parser: &mut Parser<'_, Kind>, n: usize) -> usize {
    let mut consumed = 0;
    while consumed < n && (parser.accept(&Kind::Word) || parser.accept(&Kind::Number)) {
        consumed += 1;
    }
    consumed
}
