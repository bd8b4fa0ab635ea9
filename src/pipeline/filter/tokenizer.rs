// SPDX-License-Identifier: MIT

//! Condition tokenizer
//!
//! Splits raw condition strings on delimiter characters. Each delimiter
//! character gets its own pass over the unsplit source; the tokens of every
//! pass are concatenated in delimiter order. A delimiter that never occurs in
//! the source contributes nothing, and a source containing none of the
//! delimiters comes back as a single token.

/// Split `source` into tokens, one pass per character of `delimiters`.
///
/// A delimiter only terminates a token when something has been buffered, so
/// a leading or repeated delimiter is kept as part of the following token.
/// No token is ever empty.
pub fn split(source: &str, delimiters: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut any_delimiter = false;

    for delimiter in delimiters.chars() {
        if !source.contains(delimiter) {
            continue;
        }
        any_delimiter = true;
        split_pass(source, delimiter, &mut tokens);
    }

    if !any_delimiter && !source.is_empty() {
        tokens.push(source.to_string());
    }

    tokens
}

fn split_pass(source: &str, delimiter: char, tokens: &mut Vec<String>) {
    let mut buffer = String::new();

    for c in source.chars() {
        if c == delimiter && !buffer.is_empty() {
            tokens.push(std::mem::take(&mut buffer));
        } else {
            buffer.push(c);
        }
    }

    if !buffer.is_empty() {
        tokens.push(buffer);
    }
}
