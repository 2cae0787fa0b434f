use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Article numbers carry the fixed prefix `ATS`.
const PREFIX: &str = "ATS";

/// Error type related to article numbers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArticleNumberError {
    #[error("article numbers must start with the prefix ATS")]
    InvalidPrefix,
    #[error("article numbers must end in a four digit sequence")]
    InvalidSequence,
}

/// Generated asset identifier of the form `ATS0001`, assigned once at
/// creation and immutable thereafter. Only the numeric sequence is kept;
/// the prefix is implied.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct ArticleNumber {
    sequence: u32,
}

impl ArticleNumber {
    pub fn new(sequence: u32) -> ArticleNumber {
        ArticleNumber { sequence }
    }

    /// Numeric suffix, used to resume the store counter after a load.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Case-insensitive match against an operator-supplied string.
    pub fn matches(&self, input: &str) -> bool {
        self.to_string().eq_ignore_ascii_case(input.trim())
    }
}

impl fmt::Display for ArticleNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:04}", PREFIX, self.sequence)
    }
}

impl FromStr for ArticleNumber {
    type Err = ArticleNumberError;

    fn from_str(s: &str) -> Result<ArticleNumber, ArticleNumberError> {
        let s = s.trim();
        match s.get(..PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(PREFIX) => {}
            _ => return Err(ArticleNumberError::InvalidPrefix),
        }
        let digits = &s[PREFIX.len()..];
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ArticleNumberError::InvalidSequence);
        }
        let sequence = digits
            .parse::<u32>()
            .map_err(|_| ArticleNumberError::InvalidSequence)?;
        if sequence == 0 {
            return Err(ArticleNumberError::InvalidSequence);
        }
        Ok(ArticleNumber { sequence })
    }
}

impl Serialize for ArticleNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct ArticleNumberVisitor;

impl<'de> Visitor<'de> for ArticleNumberVisitor {
    type Value = ArticleNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an article number of the form ATS0001")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match ArticleNumber::from_str(value) {
            Ok(val) => Ok(val),
            Err(err) => Err(E::custom(format!("{}", err))),
        }
    }
}

impl<'de> Deserialize<'de> for ArticleNumber {
    fn deserialize<D>(deserializer: D) -> Result<ArticleNumber, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ArticleNumberVisitor)
    }
}
