//! # Tokenizer Component
//!
//! Lexical analysis: turns raw text into a finite sequence of [`Token`]s
//! according to an ordered [`Lexicon`].
//!
//! ## Component Structure
//!
//! * [`token`]: the immutable token record
//! * [`lexicon`]: ordered `(pattern, action)` rules
//! * [`lexer`]: the compiled lexicon and its all-or-nothing [`Lexer::lex`]
//!
//! ## Error Handling
//!
//! Input that no rule matches fails with
//! [`ParseError::Lex`](crate::error::ParseError::Lex), positioned at the first
//! unmatched character.
//!
//! ## Usage Example
//!
//! ```rust
//! use rdparse::tokenizer::{Lexer, Lexicon};
//!
//! fn tokenize_example() -> Result<(), Box<dyn std::error::Error>> {
//!     let lexer = Lexer::new(
//!         Lexicon::new()
//!             .token(r"\d+", "NUMBER")
//!             .token(r"\+", "PLUS")
//!             .skip(r"\s+"),
//!     )?;
//!     let tokens = lexer.lex("12 + 7")?;
//!     assert_eq!(tokens.len(), 3);
//!     assert_eq!(tokens[1].span(), 3..4);
//!     Ok(())
//! }
//! # tokenize_example().unwrap();
//! ```

pub mod lexer;
pub mod lexicon;
pub mod token;

pub use lexer::Lexer;
pub use lexicon::{Action, Lexicon, Rule};
pub use token::Token;
