pub mod core;
pub mod parser;

pub use self::core::Grammar;
pub use self::parser::Parser;

pub use crate::error::{ParseError, ParseResult};
