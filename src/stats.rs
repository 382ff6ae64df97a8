use std::collections::HashMap;

use crate::ranking::top_n;
use crate::token::Token;

/// Returns the number of tokens whose contents is a word.
pub fn count_words(tokens: &[Token]) -> usize {
    tokens.iter().filter(|token| token.is_word()).count()
}

/// Returns the `size` most frequent proper nouns (tag `"NNP"`), most
/// frequent first. Contents are compared case-sensitively.
pub fn proper_nouns(tokens: &[Token], size: usize) -> Vec<String> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in tokens {
        if token.part_of_speech() == "NNP" {
            *counts.entry(token.contents().to_string()).or_insert(0) += 1;
        }
    }
    top_n(size, counts)
}

/// Returns the `size` most frequent words, most frequent first. Words are
/// lower-cased before counting, so case variants merge into one entry.
pub fn vocabulary(tokens: &[Token], size: usize) -> Vec<String> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in tokens {
        if token.is_word() {
            *counts.entry(token.contents().to_lowercase()).or_insert(0) += 1;
        }
    }
    top_n(size, counts)
}

/// Returns the token the tagger was least confident about, or `None` for
/// an empty input. Ties go to the first such token in input order.
pub fn least_confident_token(tokens: &[Token]) -> Option<&Token> {
    tokens
        .iter()
        .min_by(|a, b| a.confidence().total_cmp(&b.confidence()))
}

/// Returns the frequency of each part-of-speech tag, counting every token
/// whether or not it is a word.
pub fn pos_frequencies(tokens: &[Token]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.part_of_speech().to_string()).or_insert(0) += 1;
    }
    counts
}
