use std::collections::BTreeSet;
use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::sut::{KnownWords, SpellFilter, SutError, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultClass {
    BooleanOperator,
    Truncation,
    Normalization,
    Vacuous,
    SentinelPollution,
    TypeContract,
    PredicateSubstitution,
    DeadCode,
}

impl FaultClass {
    pub fn label(&self) -> &'static str {
        match self {
            FaultClass::BooleanOperator => "boolean-operator",
            FaultClass::Truncation => "truncation",
            FaultClass::Normalization => "normalization",
            FaultClass::Vacuous => "vacuous",
            FaultClass::SentinelPollution => "sentinel-pollution",
            FaultClass::TypeContract => "type-contract",
            FaultClass::PredicateSubstitution => "predicate-substitution",
            FaultClass::DeadCode => "dead-code",
        }
    }
}

/// A faulty `known` behavior over the shared dictionary.
pub type KnownFn = fn(&Dictionary, bool, &[&str]) -> Result<KnownWords, SutError>;

/// One registered mutant: a stable id, a human-readable fault description,
/// its fault class, and the behavior itself. Entries are independent; each
/// run constructs its own instances.
pub struct MutantEntry {
    pub id: &'static str,
    pub fault: &'static str,
    pub class: FaultClass,
    pub known: KnownFn,
}

impl MutantEntry {
    pub fn build(&self, dict: Arc<Dictionary>, case_sensitive: bool) -> MutantFilter {
        MutantFilter { dict, case_sensitive, known: self.known }
    }
}

/// A constructed mutant instance. Stateless: every call goes straight back
/// to the registered behavior with the same construction parameters.
pub struct MutantFilter {
    dict: Arc<Dictionary>,
    case_sensitive: bool,
    known: KnownFn,
}

impl SpellFilter for MutantFilter {
    fn known(&self, words: &[&str]) -> Result<KnownWords, SutError> {
        (self.known)(&self.dict, self.case_sensitive, words)
    }
}

/// The built-in catalog of 30 faulty implementations. Callers may append
/// their own entries; the engine and scorer take the slice as given.
pub fn mutant_catalog() -> Vec<MutantEntry> {
    vec![
        MutantEntry {
            id: "mutant_01",
            fault: "membership AND should-check became OR",
            class: FaultClass::BooleanOperator,
            known: mutant_01,
        },
        MutantEntry {
            id: "mutant_02",
            fault: "case fold dropped from the insensitive branch",
            class: FaultClass::Normalization,
            known: mutant_02,
        },
        MutantEntry {
            id: "mutant_03",
            fault: "should-check predicate dropped",
            class: FaultClass::BooleanOperator,
            known: mutant_03,
        },
        MutantEntry {
            id: "mutant_04",
            fault: "membership test negated",
            class: FaultClass::BooleanOperator,
            known: mutant_04,
        },
        MutantEntry {
            id: "mutant_05",
            fault: "case-sensitivity flag negated",
            class: FaultClass::Normalization,
            known: mutant_05,
        },
        MutantEntry {
            id: "mutant_06",
            fault: "ASCII-only case fold instead of Unicode",
            class: FaultClass::Normalization,
            known: mutant_06,
        },
        MutantEntry {
            id: "mutant_07",
            fault: "always returns the empty set",
            class: FaultClass::Vacuous,
            known: mutant_07,
        },
        MutantEntry {
            id: "mutant_08",
            fault: "returns every input word",
            class: FaultClass::Vacuous,
            known: mutant_08,
        },
        MutantEntry {
            id: "mutant_09",
            fault: "case branches swapped",
            class: FaultClass::Normalization,
            known: mutant_09,
        },
        MutantEntry {
            id: "mutant_10",
            fault: "dictionary membership check dropped",
            class: FaultClass::BooleanOperator,
            known: mutant_10,
        },
        MutantEntry {
            id: "mutant_11",
            fault: "input replaced with the empty list before normalizing",
            class: FaultClass::Vacuous,
            known: mutant_11,
        },
        MutantEntry {
            id: "mutant_12",
            fault: "normalized list replaced with the empty list",
            class: FaultClass::Vacuous,
            known: mutant_12,
        },
        MutantEntry {
            id: "mutant_13",
            fault: "returns only the first known word",
            class: FaultClass::Truncation,
            known: mutant_13,
        },
        MutantEntry {
            id: "mutant_14",
            fault: "returns all input gated on the first token's should-check",
            class: FaultClass::PredicateSubstitution,
            known: mutant_14,
        },
        MutantEntry {
            id: "mutant_15",
            fault: "both filter conditions negated",
            class: FaultClass::BooleanOperator,
            known: mutant_15,
        },
        MutantEntry {
            id: "mutant_16",
            fault: "uppercases instead of lowercasing",
            class: FaultClass::Normalization,
            known: mutant_16,
        },
        MutantEntry {
            id: "mutant_17",
            fault: "filter replaced with its De Morgan complement",
            class: FaultClass::BooleanOperator,
            known: mutant_17,
        },
        MutantEntry {
            id: "mutant_18",
            fault: "skips the first input word",
            class: FaultClass::Truncation,
            known: mutant_18,
        },
        MutantEntry {
            id: "mutant_19",
            fault: "case-fold stage skipped entirely",
            class: FaultClass::Normalization,
            known: mutant_19,
        },
        MutantEntry {
            id: "mutant_20",
            fault: "redundant non-empty conjunct added",
            class: FaultClass::DeadCode,
            known: mutant_20,
        },
        MutantEntry {
            id: "mutant_21",
            fault: "processes only the first half of the input",
            class: FaultClass::Truncation,
            known: mutant_21,
        },
        MutantEntry {
            id: "mutant_22",
            fault: "lowercases unconditionally, ignoring the flag",
            class: FaultClass::Normalization,
            known: mutant_22,
        },
        MutantEntry {
            id: "mutant_23",
            fault: "returns an ordered sequence instead of a set",
            class: FaultClass::TypeContract,
            known: mutant_23,
        },
        MutantEntry {
            id: "mutant_24",
            fault: "extra length-greater-than-two conjunct added",
            class: FaultClass::PredicateSubstitution,
            known: mutant_24,
        },
        MutantEntry {
            id: "mutant_25",
            fault: "empty input tokens silently filtered",
            class: FaultClass::DeadCode,
            known: mutant_25,
        },
        MutantEntry {
            id: "mutant_26",
            fault: "tests the token's length for membership instead of the token",
            class: FaultClass::PredicateSubstitution,
            known: mutant_26,
        },
        MutantEntry {
            id: "mutant_27",
            fault: "injects an empty string into the result",
            class: FaultClass::SentinelPollution,
            known: mutant_27,
        },
        MutantEntry {
            id: "mutant_28",
            fault: "always-false conjunct appended",
            class: FaultClass::DeadCode,
            known: mutant_28,
        },
        MutantEntry {
            id: "mutant_29",
            fault: "returns the normalized input as a set, checks dropped",
            class: FaultClass::Vacuous,
            known: mutant_29,
        },
        MutantEntry {
            id: "mutant_30",
            fault: "returns the words NOT in the dictionary",
            class: FaultClass::BooleanOperator,
            known: mutant_30,
        },
    ]
}

fn mutant_01(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) || dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_02(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words
        .iter()
        .map(|w| if cs { w.to_string() } else { w.to_string() })
        .collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_03(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp.into_iter().filter(|w| dict.contains(w)).collect();
    Ok(KnownWords::Set(known))
}

fn mutant_04(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| !dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_05(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, !cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_06(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words
        .iter()
        .map(|w| if cs { w.to_string() } else { w.to_ascii_lowercase() })
        .collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_07(_dict: &Dictionary, _cs: bool, _words: &[&str]) -> Result<KnownWords, SutError> {
    Ok(KnownWords::Set(BTreeSet::new()))
}

fn mutant_08(_dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    Ok(KnownWords::Set(tmp.into_iter().collect()))
}

fn mutant_09(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words
        .iter()
        .map(|w| if cs { w.to_lowercase() } else { w.to_string() })
        .collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_10(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp.into_iter().filter(|w| dict.should_check(w)).collect();
    Ok(KnownWords::Set(known))
}

fn mutant_11(dict: &Dictionary, cs: bool, _words: &[&str]) -> Result<KnownWords, SutError> {
    let empty: Vec<&str> = Vec::new();
    let tmp: Vec<String> = empty.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_12(dict: &Dictionary, _cs: bool, _words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = Vec::new();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_13(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let result: BTreeSet<String> = tmp
        .iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .cloned()
        .collect();
    for w in &tmp {
        if result.contains(w) {
            let mut first = BTreeSet::new();
            first.insert(w.clone());
            return Ok(KnownWords::Set(first));
        }
    }
    Ok(KnownWords::Set(BTreeSet::new()))
}

fn mutant_14(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let first = tmp.first().cloned().unwrap_or_default();
    if dict.should_check(&first) {
        Ok(KnownWords::Set(tmp.into_iter().collect()))
    } else {
        Ok(KnownWords::Set(BTreeSet::new()))
    }
}

fn mutant_15(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| !dict.contains(w) && !dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_16(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words
        .iter()
        .map(|w| if cs { w.to_string() } else { w.to_uppercase() })
        .collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_17(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| !dict.contains(w) || !dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_18(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let rest = words.get(1..).unwrap_or(&[]);
    let tmp: Vec<String> = rest.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_19(dict: &Dictionary, _cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp_words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    let tmp = tmp_words;
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_20(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| !w.is_empty() && dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_21(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let half = words.len() / 2;
    let slice = if half > 0 { &words[..half] } else { words };
    let tmp: Vec<String> = slice.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_22(dict: &Dictionary, _cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_23(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known: Vec<String> = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Sequence(known))
}

fn mutant_24(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w) && w.len() > 2)
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_25(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| normalize(w, cs))
        .collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_26(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(&w.chars().count().to_string()) && dict.should_check(w))
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_27(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let mut result: BTreeSet<String> = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w))
        .collect();
    result.insert(String::new());
    Ok(KnownWords::Set(result))
}

fn mutant_28(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp
        .into_iter()
        .filter(|w| dict.contains(w) && dict.should_check(w) && false)
        .collect();
    Ok(KnownWords::Set(known))
}

fn mutant_29(_dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    Ok(KnownWords::Set(tmp.into_iter().collect()))
}

fn mutant_30(dict: &Dictionary, cs: bool, words: &[&str]) -> Result<KnownWords, SutError> {
    let tmp: Vec<String> = words.iter().map(|w| normalize(w, cs)).collect();
    let known = tmp.into_iter().filter(|w| !dict.contains(w)).collect();
    Ok(KnownWords::Set(known))
}
