use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::ConfigError,
    tokenizer::{Action, Lexer, Lexicon},
};

/// Serializable description of a lexicon whose token kinds are strings.
///
/// ```json
/// {
///   "case_insensitive": false,
///   "rules": [
///     { "pattern": "\\d+", "kind": "NUMBER" },
///     { "pattern": "\\s+" }
///   ]
/// }
/// ```
///
/// A rule without a `kind`, or with `"skip": true`, produces no token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub case_insensitive: bool,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub skip: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl RuleConfig {
    pub fn token<P: Into<String>, K: Into<String>>(pattern: P, kind: K) -> Self {
        Self {
            pattern: pattern.into(),
            kind: Some(kind.into()),
            skip: false,
        }
    }

    pub fn skip<P: Into<String>>(pattern: P) -> Self {
        Self {
            pattern: pattern.into(),
            kind: None,
            skip: true,
        }
    }

    fn into_action(self) -> (String, Action<String>) {
        let action = match self.kind {
            Some(kind) if !self.skip => Action::Emit(kind),
            _ => Action::Skip,
        };
        (self.pattern, action)
    }
}

impl LexiconConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn into_lexicon(self) -> Lexicon<String> {
        let case_insensitive = self.case_insensitive;
        self.rules
            .into_iter()
            .map(RuleConfig::into_action)
            .collect::<Lexicon<String>>()
            .case_insensitive(case_insensitive)
    }
}

impl Lexer<String> {
    pub fn from_config(config: LexiconConfig) -> Result<Self, ConfigError> {
        Ok(Lexer::new(config.into_lexicon())?)
    }
}
