//! Descriptive statistics over a pre-tokenized, POS-tagged text.
//!
//! The tokenizer/tagger and any presentation layer live elsewhere; this
//! crate only consumes already-tagged [`Token`]s and reports counts:
//! word totals, proper-noun and vocabulary frequencies, part-of-speech
//! distribution, and the least-confident token. Ranking goes through a
//! single generic [`top_n`] routine with a documented tie-break.

pub mod ranking;
pub mod stats;
pub mod token;

pub use ranking::top_n;
pub use stats::{
    count_words, least_confident_token, pos_frequencies, proper_nouns, vocabulary,
};
pub use token::{Token, TokenParseError};
