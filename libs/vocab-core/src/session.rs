//! Deduplication and indexing of extracted candidates.
//!
//! One [`ExtractionSession`] owns the seen-word set, the index counter and
//! the id source for a single run. The primary and fallback passes feed the
//! same session in sequence; a new document needs a new session.

use std::collections::HashSet;

use uuid::Uuid;

use crate::normalize::normalize_definition;
use crate::types::{VocabularyCandidate, VocabularyItem};

/// Produces item ids. Implementations must be deterministic for a given
/// sequence of calls so identical inputs produce identical output.
pub trait IdSource {
    fn next_id(&mut self, word: &str, index: usize) -> String;
}

/// Ids of the form `{prefix}-{index}`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("vocab")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, _word: &str, index: usize) -> String {
        format!("{}-{}", self.prefix, index)
    }
}

/// UUID v5 ids hashed from the item position and lower-cased word.
#[derive(Debug, Clone)]
pub struct HashedIds {
    namespace: Uuid,
}

impl HashedIds {
    pub fn new(namespace: Uuid) -> Self {
        Self { namespace }
    }
}

impl Default for HashedIds {
    fn default() -> Self {
        Self::new(Uuid::new_v5(&Uuid::NAMESPACE_OID, b"vocab-core.item"))
    }
}

impl IdSource for HashedIds {
    fn next_id(&mut self, word: &str, index: usize) -> String {
        let name = format!("{}:{}", index, word.to_lowercase());
        Uuid::new_v5(&self.namespace, name.as_bytes()).to_string()
    }
}

/// Accumulates unique vocabulary items for one extraction run.
#[derive(Debug)]
pub struct ExtractionSession<I = HashedIds> {
    seen: HashSet<String>,
    items: Vec<VocabularyItem>,
    ids: I,
}

impl Default for ExtractionSession<HashedIds> {
    fn default() -> Self {
        Self::new(HashedIds::default())
    }
}

impl<I: IdSource> ExtractionSession<I> {
    pub fn new(ids: I) -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
            ids,
        }
    }

    /// Accept a candidate unless its word was already seen (ignoring case).
    ///
    /// The first-seen casing is kept. Returns whether the candidate was added.
    pub fn accept(&mut self, candidate: VocabularyCandidate) -> bool {
        if !self.seen.insert(candidate.word.to_lowercase()) {
            tracing::trace!(word = %candidate.word, "dropped duplicate word");
            return false;
        }

        let original_index = self.items.len();
        let id = self.ids.next_id(&candidate.word, original_index);
        self.items.push(VocabularyItem {
            id,
            definition: normalize_definition(&candidate.definition),
            word: candidate.word,
            level: 0,
            original_index,
        });
        true
    }

    /// Accept each candidate in order, returning how many were added.
    pub fn accept_all(&mut self, candidates: impl IntoIterator<Item = VocabularyCandidate>) -> usize {
        candidates
            .into_iter()
            .map(|c| self.accept(c))
            .filter(|added| *added)
            .count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<VocabularyItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(word: &str, definition: &str) -> VocabularyCandidate {
        VocabularyCandidate::new(word, definition)
    }

    #[test]
    fn assigns_contiguous_indices() {
        let mut session = ExtractionSession::new(SequentialIds::default());
        session.accept(candidate("cat", "n. 猫"));
        session.accept(candidate("dog", "n. 狗"));

        let items = session.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].original_index, 0);
        assert_eq!(items[0].id, "vocab-0");
        assert_eq!(items[1].original_index, 1);
        assert_eq!(items[1].id, "vocab-1");
        assert!(items.iter().all(|i| i.level == 0));
    }

    #[test]
    fn duplicate_words_ignore_case_and_keep_first() {
        let mut session = ExtractionSession::new(SequentialIds::default());
        assert!(session.accept(candidate("Cat", "n. 猫")));
        assert!(!session.accept(candidate("cat", "n. 猫咪")));
        assert!(!session.accept(candidate("CAT", "n. 猫")));
        assert!(session.accept(candidate("dog", "n. 狗")));

        let items = session.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].word, "Cat");
        assert_eq!(items[0].definition, "n. 猫");
        assert_eq!(items[1].original_index, 1);
    }

    #[test]
    fn definitions_are_normalized() {
        let mut session = ExtractionSession::new(SequentialIds::default());
        session.accept(candidate("owl", "n.  猫 头 鹰 "));
        assert_eq!(session.items()[0].definition, "n. 猫头鹰");
    }

    #[test]
    fn accept_all_counts_additions() {
        let mut session = ExtractionSession::<HashedIds>::default();
        let added = session.accept_all(vec![
            candidate("cat", "n. 猫"),
            candidate("Cat", "n. 猫"),
            candidate("dog", "n. 狗"),
        ]);
        assert_eq!(added, 2);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn hashed_ids_are_deterministic_and_unique() {
        let run = || {
            let mut session = ExtractionSession::<HashedIds>::default();
            session.accept(candidate("cat", "n. 猫"));
            session.accept(candidate("dog", "n. 狗"));
            session.into_items()
        };
        let first = run();
        let second = run();
        assert_eq!(first, second);
        assert_ne!(first[0].id, first[1].id);
        assert!(Uuid::parse_str(&first[0].id).is_ok());
    }

    #[test]
    fn fresh_session_starts_over() {
        let mut first = ExtractionSession::new(SequentialIds::default());
        first.accept(candidate("cat", "n. 猫"));

        let mut second = ExtractionSession::new(SequentialIds::default());
        assert!(second.accept(candidate("cat", "n. 猫")));
        assert_eq!(second.items()[0].original_index, 0);
    }
}
