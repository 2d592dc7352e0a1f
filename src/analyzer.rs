//! Text analysis
//!
//! Pure conversions and counts over a single line of input. Nothing in here
//! touches storage or the terminal; callers decide what to do with the
//! [`AnalysisResult`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters counted as vowels (after lowercasing)
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Errors raised by [`analyze`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The input string was empty
    #[error("Please enter some text.")]
    EmptyInput,
}

/// Conversions and counts computed for one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The input, unmodified
    pub original: String,
    pub lower: String,
    pub upper: String,
    pub title_case: String,
    /// Input reversed by code point
    pub reversed: String,
    /// Total number of characters, spaces and punctuation included
    pub letter_count: usize,
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Non-blank segments between `.`, `!` and `?`
    pub sentence_count: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
}

impl AnalysisResult {
    /// Text placed on the clipboard by the "copy conversions" action
    pub fn conversions_report(&self) -> String {
        format!(
            "Original: {}\n\
            Lower Case: {}\n\
            Upper Case: {}\n\
            Title Case: {}\n\
            Reversed: {}\n",
            self.original, self.lower, self.upper, self.title_case, self.reversed
        )
    }
}

/// Analyse `input`.
///
/// Only the empty string is rejected; whitespace-only input is analysed
/// like anything else.
pub fn analyze(input: &str) -> Result<AnalysisResult, AnalysisError> {
    if input.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let lower = input.to_lowercase();
    let vowel_count = lower.chars().filter(|c| VOWELS.contains(c)).count();
    let consonant_count = lower
        .chars()
        .filter(|c| c.is_alphabetic() && !VOWELS.contains(c))
        .count();

    Ok(AnalysisResult {
        original: input.to_string(),
        upper: input.to_uppercase(),
        title_case: title_case(input),
        reversed: input.chars().rev().collect(),
        letter_count: input.chars().count(),
        word_count: input.split_whitespace().count(),
        sentence_count: count_sentences(input),
        vowel_count,
        consonant_count,
        lower,
    })
}

/// Titlecase the first cased character of every run of cased characters and
/// lowercase the rest.
///
/// A run is broken by anything without case, so digits and apostrophes start
/// a new word: `"they're 1st"` becomes `"They'Re 1St"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_cased = false;

    for c in input.chars() {
        let cased = is_cased(c);
        if cased && !previous_is_cased {
            push_titlecase(&mut out, c);
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        previous_is_cased = cased;
    }

    out
}

// Letters of the Unicode titlecase category (Lt)
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}' | '\u{01C8}' | '\u{01CB}' | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}' | '\u{1FCC}' | '\u{1FFC}'
    )
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase_letter(c)
}

/// Push the titlecase form of `c`.
///
/// Where the uppercase mapping expands to several characters (`ß` to `SS`,
/// `ﬁ` to `FI`) only the first stays uppercase. Latin digraphs map to their
/// single titlecase letter.
fn push_titlecase(out: &mut String, c: char) {
    match c {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        c if is_titlecase_letter(c) => out.push(c),
        c => {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
        }
    }
}

/// Count sentences, treating `!` and `?` as `.` and ignoring blank segments
pub fn count_sentences(input: &str) -> usize {
    input
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}
