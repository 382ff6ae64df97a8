use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One lexical unit: its text, its part-of-speech tag, and the tagger's
/// confidence in that tag (lower = less confident).
///
/// Fields are fixed at construction; all access is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    contents: String,
    part_of_speech: String,
    confidence: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum TokenParseError {
    #[error("malformed token literal: {0:?}")]
    Malformed(String),

    #[error("invalid confidence value: {0}")]
    Confidence(#[from] std::num::ParseFloatError),
}

impl Token {
    pub fn new(
        contents: impl Into<String>,
        part_of_speech: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            contents: contents.into(),
            part_of_speech: part_of_speech.into(),
            confidence,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// True iff the contents is non-empty and entirely alphabetic.
    /// Punctuation tokens, numbers, and mixed forms like "don't" are not
    /// words.
    pub fn is_word(&self) -> bool {
        !self.contents.is_empty() && self.contents.chars().all(char::is_alphabetic)
    }
}

impl fmt::Display for Token {
    /// Diagnostic form: `contents(TAG:confidence)` with one decimal place,
    /// e.g. `Alice(NNP:1.9)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}:{:.1})",
            self.contents, self.part_of_speech, self.confidence
        )
    }
}

impl FromStr for Token {
    type Err = TokenParseError;

    /// Parses the `Display` form back into a token. Splits on the *last*
    /// `(` and `:` so that contents containing either character still
    /// round-trips.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TokenParseError::Malformed(s.to_string());

        let body = s.strip_suffix(')').ok_or_else(malformed)?;
        let (tag_part, confidence_part) = body.rsplit_once(':').ok_or_else(malformed)?;
        let (contents, part_of_speech) = tag_part.rsplit_once('(').ok_or_else(malformed)?;

        let confidence: f64 = confidence_part.trim().parse()?;
        Ok(Token::new(contents, part_of_speech, confidence))
    }
}
