//! # rdparse: a foundation for hand-written recursive descent parsers
//!
//! rdparse provides the reusable half of a recursive descent parser: a
//! tokenizer driven by an ordered lexicon of regular expressions, and a parser
//! cursor with one token of lookahead. Concrete grammars live with the caller.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser cursor → Grammar::do_parse → Output
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module compiles a [`Lexicon`] into a [`Lexer`]. Lexing is
//! all-or-nothing: the whole input is tiled by tokens and skip rules, or a
//! [`ParseError::Lex`] points at the first character nothing matches.
//!
//! ### Stage 2: Parsing
//!
//! The [`analyzer`] module holds the [`Parser`] cursor. A [`Grammar`] drives it
//! with [`Parser::accept`] and [`Parser::expect`], and may splice tokens back
//! into the stream with [`Parser::push_tokens`] (alias or macro expansion).
//!
//! ## Diagnostics
//!
//! Every [`ParseError`] carries the source text and a byte offset, and renders
//! as a caret diagnostic through [`ParseError::print_error`].
//!
//! ## Configuration
//!
//! Lexicons with string token kinds can be loaded from JSON through
//! [`config::LexiconConfig`].
//!
//! ## Example
//!
//! ```rust
//! use rdparse::{Grammar, Lexer, Lexicon, ParseResult, Parser};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Kind { Number, Plus }
//!
//! struct Sum;
//!
//! impl Grammar<Kind> for Sum {
//!     type Output = i64;
//!
//!     fn do_parse(&mut self, parser: &mut Parser<'_, Kind>) -> ParseResult<i64> {
//!         let mut total = 0;
//!         loop {
//!             let number = parser.expect(&Kind::Number)?;
//!             total += number.value().parse::<i64>().unwrap_or_default();
//!             if !parser.accept(&Kind::Plus) {
//!                 break;
//!             }
//!         }
//!         match parser.next() {
//!             Some(_) => Err(parser.unexpected_token()),
//!             None => Ok(total),
//!         }
//!     }
//! }
//!
//! let lexer = Lexer::new(
//!     Lexicon::new()
//!         .token(r"\d+", Kind::Number)
//!         .token(r"\+", Kind::Plus)
//!         .skip(r"\s+"),
//! ).unwrap();
//! let mut parser = Parser::new(&lexer);
//! assert_eq!(parser.parse("12 + 7", &mut Sum).unwrap(), 19);
//!
//! let error = parser.parse("12 7", &mut Sum).unwrap_err();
//! assert_eq!(error.pos(), 2);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use analyzer::{Grammar, Parser};
pub use config::LexiconConfig;
pub use error::*;
pub use tokenizer::{Action, Lexer, Lexicon, Token};
