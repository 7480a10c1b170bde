use std::io;

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

pub type LexResult<T> = Result<T, ParseError>;

/// Positional diagnostic raised while lexing or parsing.
///
/// Both variants carry the full source `string` and a byte offset `pos` into
/// it, which is enough to point a caret at the offending location. `Lex` is
/// only produced by [`Lexer::lex`](crate::tokenizer::lexer::Lexer::lex) for
/// input no lexicon rule matches; everything raised by the parser cursor or a
/// grammar is `Syntax`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{message} at position {pos}")]
    Lex {
        message: String,
        string: String,
        pos: usize,
    },
    #[error("{message} at position {pos}")]
    Syntax {
        message: String,
        string: String,
        pos: usize,
    },
}

impl ParseError {
    pub fn lex<M: Into<String>, S: Into<String>>(message: M, string: S, pos: usize) -> Self {
        let string = string.into();
        let pos = clamp_offset(&string, pos);
        ParseError::Lex {
            message: message.into(),
            string,
            pos,
        }
    }

    pub fn syntax<M: Into<String>, S: Into<String>>(message: M, string: S, pos: usize) -> Self {
        let string = string.into();
        let pos = clamp_offset(&string, pos);
        ParseError::Syntax {
            message: message.into(),
            string,
            pos,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParseError::Lex { message, .. } | ParseError::Syntax { message, .. } => message,
        }
    }

    /// The full source text the error points into.
    pub fn string(&self) -> &str {
        match self {
            ParseError::Lex { string, .. } | ParseError::Syntax { string, .. } => string,
        }
    }

    pub fn pos(&self) -> usize {
        match self {
            ParseError::Lex { pos, .. } | ParseError::Syntax { pos, .. } => *pos,
        }
    }

    pub fn is_lex_error(&self) -> bool {
        matches!(self, ParseError::Lex { .. })
    }

    /// Writes the caret rendering of this error:
    ///
    /// ```text
    /// <message>:
    ///
    ///     <string>
    ///         ^
    ///
    /// ```
    ///
    /// The caret is indented by the number of characters in front of `pos`,
    /// which equals `pos` for ASCII sources.
    pub fn print_error<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.caret_diagnostic().as_bytes())
    }

    pub fn caret_diagnostic(&self) -> String {
        let string = self.string();
        let column = string
            .get(..self.pos())
            .map_or(self.pos(), |prefix| prefix.chars().count());
        format!(
            "{}:\n\n    {}\n    {}^\n\n",
            self.message(),
            string,
            " ".repeat(column)
        )
    }
}

/// Failures while compiling a lexicon into a [`Lexer`](crate::tokenizer::lexer::Lexer).
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Lexicon has no rules")]
    Empty,
    #[error("Invalid pattern #{index} `{pattern}`: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read lexicon config: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse lexicon config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Pulls `pos` back onto a char boundary inside `string`.
///
/// Offsets come from token spans, and spliced tokens may carry spans from
/// some other text.
fn clamp_offset(string: &str, pos: usize) -> usize {
    let mut pos = pos.min(string.len());
    while !string.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
