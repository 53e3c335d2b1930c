//! Splitting raw text into sentences and word tokens.

use crate::errors::{Result, decode_error, decode_error_ref, invalid_argument};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of word tokens; never empty.
pub type Sentence = Vec<String>;

/// Punctuation stripped from the end of a word.
/// Only a single trailing character is removed; punctuation elsewhere
/// in a word is preserved.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', '!', ':', ';'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

/// Parse a command line spelling of an encoding name.
pub fn parse_encoding(arg: &str) -> Result<TextEncoding> {
    match arg {
        "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
        "latin-1" | "latin1" => Ok(TextEncoding::Latin1),
        _ => Err(invalid_argument(format!("unknown encoding '{arg}'"))),
    }
}

fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => Err(decode_error(format!(
                "invalid UTF-8 at byte {}",
                e.valid_up_to()
            ))),
        },
        // Latin-1 maps each byte to the code point of the same value.
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}

fn strip_word(raw: &str) -> Option<&str> {
    let word = match raw.chars().next_back() {
        Some(c) if TRAILING_PUNCTUATION.contains(&c) => &raw[..raw.len() - c.len_utf8()],
        _ => raw,
    };
    (!word.is_empty()).then_some(word)
}

fn tokenize_sentence(line: &str) -> Option<Sentence> {
    let words = line
        .split(' ')
        .filter_map(strip_word)
        .map(str::to_owned)
        .collect_vec();
    if words.is_empty() { None } else { Some(words) }
}

/// Decode raw bytes and split them into sentences of word tokens.
///
/// Sentences are separated by line breaks, words by spaces; empty
/// segments are discarded at both levels. Fails if the bytes are not
/// valid under `encoding` or if the input holds no text at all.
pub fn tokenize(bytes: &[u8], encoding: TextEncoding) -> Result<Vec<Sentence>> {
    if bytes.is_empty() {
        return Err(decode_error_ref("empty input"));
    }
    let text = decode(bytes, encoding)?;
    if text.chars().all(char::is_whitespace) {
        return Err(decode_error_ref("no text content"));
    }
    let sentences = text
        .split(['\n', '\r'])
        .filter_map(tokenize_sentence)
        .collect_vec();
    Ok(sentences)
}
