use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::dictionary::Dictionary;

/// A failure raised by an implementation under test. For well-formed input
/// the contract allows none, so the engine treats any of these as a
/// violation in its own right.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SutError(pub String);

/// What a `known` call hands back. Conforming implementations return `Set`;
/// `Sequence` exists so the catalog can express the fault class that leaks
/// an ordered, duplicate-bearing collection through the contract. Equality
/// is set-wise between sets, order-sensitive between sequences, and never
/// true across the two, which is exactly what lets a permutation check
/// observe sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnownWords {
    Set(BTreeSet<String>),
    Sequence(Vec<String>),
}

impl KnownWords {
    pub fn empty() -> KnownWords {
        KnownWords::Set(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        match self {
            KnownWords::Set(s) => s.len(),
            KnownWords::Sequence(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        match self {
            KnownWords::Set(s) => s.contains(word),
            KnownWords::Sequence(v) => v.iter().any(|w| w == word),
        }
    }

    /// Collapse to a lowercased set, losing order and duplicates.
    pub fn to_lower_set(&self) -> BTreeSet<String> {
        match self {
            KnownWords::Set(s) => s.iter().map(|w| w.to_lowercase()).collect(),
            KnownWords::Sequence(v) => v.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// One word per line, for diffing two outputs against each other.
    /// Sets render sorted; sequences render in their observable order.
    pub fn render_lines(&self) -> String {
        let mut out = String::new();
        match self {
            KnownWords::Set(s) => {
                for w in s {
                    out.push_str(w);
                    out.push('\n');
                }
            }
            KnownWords::Sequence(v) => {
                for w in v {
                    out.push_str(w);
                    out.push('\n');
                }
            }
        }
        out
    }

    pub fn render(&self) -> String {
        match self {
            KnownWords::Set(s) => {
                let words: Vec<&str> = s.iter().map(|w| w.as_str()).collect();
                format!("{{{}}}", words.join(", "))
            }
            KnownWords::Sequence(v) => {
                let words: Vec<&str> = v.iter().map(|w| w.as_str()).collect();
                format!("[{}]", words.join(", "))
            }
        }
    }
}

/// The contract every implementation under test satisfies: map a word list
/// to the subset the dictionary recognizes. Implementations are constructed
/// with their dictionary and case flag and must be referentially transparent
/// from then on.
pub trait SpellFilter {
    fn known(&self, words: &[&str]) -> Result<KnownWords, SutError>;
}

/// Canonical form of one token: the text as-is when case-sensitive,
/// lowercased otherwise. Dictionary keys are stored in this form.
pub fn normalize(word: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

/// The reference implementation of the contract.
pub struct ReferenceFilter {
    dict: Arc<Dictionary>,
    case_sensitive: bool,
}

impl ReferenceFilter {
    pub fn new(dict: Arc<Dictionary>, case_sensitive: bool) -> ReferenceFilter {
        ReferenceFilter { dict, case_sensitive }
    }
}

impl SpellFilter for ReferenceFilter {
    fn known(&self, words: &[&str]) -> Result<KnownWords, SutError> {
        let normalized: Vec<String> = words
            .iter()
            .map(|w| normalize(w, self.case_sensitive))
            .collect();
        let known = normalized
            .into_iter()
            .filter(|w| self.dict.contains(w) && self.dict.should_check(w))
            .collect();
        Ok(KnownWords::Set(known))
    }
}
