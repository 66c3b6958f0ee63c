//! Unanchored extraction for text where entries ran together.
//!
//! When rows were merged or split badly, several entries can end up on one
//! line, or a headword can be glued to the previous definition. This pass
//! ignores line boundaries and walks whitespace-separated tokens instead:
//! an entry starts wherever a token ends in a Latin word and the next token
//! opens with a part-of-speech marker. The definition runs until the next
//! entry start, cut short at the first character outside its alphabet.

use super::{keep, CandidatePass};
use crate::script::{is_cjk, starts_with_pos_marker, trailing_latin_word};
use crate::types::{ExtractionConfig, VocabularyCandidate};

/// A whitespace-delimited token with its byte span in the source text.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    start: usize,
    text: &'a str,
}

impl Token<'_> {
    fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token { start: s, text: &text[s..i] });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token { start: s, text: &text[s..] });
    }
    tokens
}

/// Where an entry's headword and definition begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryStart {
    word_start: usize,
    word_end: usize,
    definition_start: usize,
}

fn entry_starts(tokens: &[Token<'_>]) -> Vec<EntryStart> {
    tokens
        .windows(2)
        .filter_map(|pair| {
            let (head, next) = (pair[0], pair[1]);
            if !starts_with_pos_marker(next.text) {
                return None;
            }
            let offset = trailing_latin_word(head.text)?;
            Some(EntryStart {
                word_start: head.start + offset,
                word_end: head.end(),
                definition_start: next.start,
            })
        })
        .collect()
}

fn is_definition_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c.is_whitespace()
        || is_cjk(c)
        || matches!(
            c,
            '.' | ',' | ';' | ':' | '/' | '(' | ')' | '\'' | '-' | '~' | '…'
                | '，' | '。' | '；' | '：' | '、' | '（' | '）' | '·'
        )
}

/// Cut the definition at the first character outside its alphabet.
fn definition_run(raw: &str) -> &str {
    let end = raw
        .char_indices()
        .find(|&(_, c)| !is_definition_char(c))
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].trim()
}

/// Loose pass over the unbroken text stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackPass;

impl CandidatePass for FallbackPass {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn candidates(&self, text: &str, config: &ExtractionConfig) -> Vec<VocabularyCandidate> {
        let tokens = tokenize(text);
        let starts = entry_starts(&tokens);

        starts
            .iter()
            .enumerate()
            .filter_map(|(i, start)| {
                let limit = starts
                    .get(i + 1)
                    .map_or(text.len(), |next| next.word_start)
                    .max(start.definition_start);
                let word = &text[start.word_start..start.word_end];
                let definition = definition_run(&text[start.definition_start..limit]);
                keep(self.name(), word, definition, config)
                    .then(|| VocabularyCandidate::new(word, definition))
            })
            .collect()
    }
}
