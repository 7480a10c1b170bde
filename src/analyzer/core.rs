use super::parser::Parser;
use crate::error::ParseResult;

/// A grammar-driving routine.
///
/// [`Parser::parse`] lexes the input, primes the lookahead and then hands the
/// cursor to `do_parse`, which expresses production rules as sequences of
/// [`Parser::accept`] and [`Parser::expect`] calls. Any error it returns is
/// passed through to the caller of `parse` unchanged.
pub trait Grammar<K> {
    type Output;

    fn do_parse(&mut self, parser: &mut Parser<'_, K>) -> ParseResult<Self::Output>;
}

impl<K, R, F> Grammar<K> for F
where
    F: FnMut(&mut Parser<'_, K>) -> ParseResult<R>,
{
    type Output = R;

    fn do_parse(&mut self, parser: &mut Parser<'_, K>) -> ParseResult<R> {
        self(parser)
    }
}
