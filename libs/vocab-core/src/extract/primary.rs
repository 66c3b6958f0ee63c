//! Line-anchored extraction.
//!
//! Each line is classified on its own. An entry line looks like
//!
//! ```text
//! □ cat n. 猫
//! well-known adj. 著名的
//! ```
//!
//! optionally led by a checkbox or bracket glyph, then a headword of two or
//! more Latin letters or hyphens, whitespace, and a definition holding a
//! part-of-speech marker and at least one CJK character.

use std::sync::LazyLock;

use regex::Regex;

use super::{keep, CandidatePass};
use crate::types::{ExtractionConfig, VocabularyCandidate};

static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[□☐☑☒■◻▢\[\]【】]*\s*([A-Za-z][A-Za-z-]+)\s+(.+?)\s*$")
        .expect("valid entry line regex")
});

enum LineType<'a> {
    Entry { word: &'a str, definition: &'a str },
    Other,
}

fn parse_line(line: &str) -> LineType<'_> {
    match ENTRY_LINE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(word), Some(definition)) => LineType::Entry {
                word: word.as_str(),
                definition: definition.as_str(),
            },
            _ => LineType::Other,
        },
        None => LineType::Other,
    }
}

/// Strict pass over whole lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryPass;

impl CandidatePass for PrimaryPass {
    fn name(&self) -> &'static str {
        "primary"
    }

    fn candidates(&self, text: &str, config: &ExtractionConfig) -> Vec<VocabularyCandidate> {
        text.lines()
            .filter_map(|line| match parse_line(line) {
                LineType::Entry { word, definition } if keep(self.name(), word, definition, config) => {
                    Some(VocabularyCandidate::new(word, definition))
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> Vec<(String, String)> {
        PrimaryPass
            .candidates(text, &ExtractionConfig::default())
            .into_iter()
            .map(|c| (c.word, c.definition))
            .collect()
    }

    fn pair(word: &str, definition: &str) -> (String, String) {
        (word.to_string(), definition.to_string())
    }

    #[test]
    fn simple_entry() {
        assert_eq!(run("cat n. 猫\n"), vec![pair("cat", "n. 猫")]);
    }

    #[test]
    fn entries_in_text_order() {
        let text = "List 1 词汇\ncat n. 猫\ndog n. 狗\n";
        assert_eq!(run(text), vec![pair("cat", "n. 猫"), pair("dog", "n. 狗")]);
    }

    #[test]
    fn checkbox_and_bracket_prefixes() {
        let text = "□ cat n. 猫\n[] dog n. 狗\n【】 fish n. 鱼\n☐bird n. 鸟";
        let words: Vec<String> = run(text).into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["cat", "dog", "fish", "bird"]);
    }

    #[test]
    fn hyphenated_word_and_compound_marker() {
        assert_eq!(
            run("well-known adj./adv. 著名的"),
            vec![pair("well-known", "adj./adv. 著名的")]
        );
    }

    #[test]
    fn marker_need_not_lead_definition() {
        assert_eq!(run("run [rʌn] v. 跑"), vec![pair("run", "[rʌn] v. 跑")]);
    }

    #[test]
    fn drops_stop_words() {
        assert!(run("Page n. 页\nUnit n. 单元").is_empty());
    }

    #[test]
    fn drops_lines_without_marker_or_cjk() {
        assert!(run("cat 猫\ndog n. canine\nx n. 叉").is_empty());
    }

    #[test]
    fn rejects_leading_numbers() {
        assert!(run("1. cat n. 猫").is_empty());
    }

    #[test]
    fn empty_text() {
        assert!(run("").is_empty());
    }
}
