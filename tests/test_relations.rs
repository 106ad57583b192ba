use std::collections::BTreeSet;

use metamorph::Language;
use metamorph::dictionary::Dictionary;
use metamorph::relations::{
    CaseInvariance, IrrelevantAddition, MetamorphicRelation, NonTriviality, Permutation,
    relation_catalog,
};
use metamorph::sut::KnownWords;

fn set(words: &[&str]) -> KnownWords {
    KnownWords::Set(words.iter().map(|w| w.to_string()).collect())
}

fn seq(words: &[&str]) -> KnownWords {
    KnownWords::Sequence(words.iter().map(|w| w.to_string()).collect())
}

// --- catalog ---

#[test]
fn catalog_holds_four_relations_in_order() {
    let catalog = relation_catalog();
    let ids: Vec<&str> = catalog.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["MR1", "MR2", "MR3", "MR4"]);
}

#[test]
fn catalog_names_are_set() {
    for relation in relation_catalog() {
        assert!(!relation.name().is_empty());
    }
}

// --- MR1 permutation ---

#[test]
fn permutation_transform_preserves_the_multiset() {
    let source = ["cat", "dog", "bird", "dog"];
    let followup = Permutation.transform(&source).unwrap();
    let mut sorted_source: Vec<String> = source.iter().map(|w| w.to_string()).collect();
    sorted_source.sort();
    let mut sorted_followup = followup.clone();
    sorted_followup.sort();
    assert_eq!(sorted_followup, sorted_source);
}

#[test]
fn permutation_transform_is_deterministic() {
    let source = ["one", "two", "three", "four"];
    assert_eq!(
        Permutation.transform(&source),
        Permutation.transform(&source)
    );
}

#[test]
fn permutation_holds_on_equal_sets() {
    let so = set(&["cat", "dog"]);
    let fo = set(&["dog", "cat"]);
    assert!(Permutation.holds(&so, Some(&fo)));
}

#[test]
fn permutation_violated_on_differing_sets() {
    assert!(!Permutation.holds(&set(&["cat"]), Some(&set(&["dog"]))));
}

#[test]
fn permutation_observes_sequence_order() {
    let so = seq(&["cat", "dog"]);
    let fo = seq(&["dog", "cat"]);
    assert!(!Permutation.holds(&so, Some(&fo)));
    assert!(Permutation.holds(&so, Some(&seq(&["cat", "dog"]))));
}

#[test]
fn permutation_observes_set_vs_sequence() {
    assert!(!Permutation.holds(&set(&["cat"]), Some(&seq(&["cat"]))));
}

#[test]
fn permutation_without_followup_is_violated() {
    assert!(!Permutation.holds(&set(&["cat"]), None));
}

// --- MR2 irrelevant addition ---

#[test]
fn addition_transform_appends_one_filler() {
    let source = ["hello", "world"];
    let followup = IrrelevantAddition.transform(&source).unwrap();
    assert_eq!(followup.len(), 3);
    assert_eq!(&followup[..2], &["hello".to_string(), "world".to_string()]);
}

#[test]
fn addition_fillers_stay_out_of_vocabulary() {
    let dict = Dictionary::builtin(Language::English);
    for len in 0..8 {
        let source: Vec<&str> = std::iter::repeat_n("hello", len).collect();
        let followup = IrrelevantAddition.transform(&source).unwrap();
        let filler = followup.last().unwrap();
        assert!(
            !dict.contains(filler),
            "appended filler {:?} must not be a dictionary word",
            filler
        );
    }
}

#[test]
fn addition_holds_on_equal_outputs() {
    assert!(IrrelevantAddition.holds(&set(&["hello"]), Some(&set(&["hello"]))));
    assert!(!IrrelevantAddition.holds(&set(&["hello"]), Some(&set(&["hello", "asdfgh"]))));
}

// --- MR3 case invariance ---

#[test]
fn case_transform_denotes_the_same_words() {
    let source = ["hello", "world"];
    let followup = CaseInvariance.transform(&source).unwrap();
    let lowered: Vec<String> = followup.iter().map(|w| w.to_lowercase()).collect();
    assert_eq!(lowered, vec!["hello".to_string(), "world".to_string()]);
}

#[test]
fn case_transform_changes_the_casing() {
    let followup = CaseInvariance.transform(&["hello"]).unwrap();
    assert_ne!(followup[0], "hello");
    assert_eq!(followup[0], "HeLlO");
}

#[test]
fn case_holds_compares_lowercased_sets() {
    assert!(CaseInvariance.holds(&set(&["Hello"]), Some(&set(&["hello"]))));
    assert!(CaseInvariance.holds(&set(&["HELLO"]), Some(&seq(&["hello"]))));
    assert!(!CaseInvariance.holds(&set(&["hello"]), Some(&set(&["world"]))));
    assert!(!CaseInvariance.holds(&set(&["hello"]), None));
}

// --- MR4 non-triviality ---

#[test]
fn non_triviality_takes_a_single_input() {
    assert_eq!(NonTriviality.transform(&["hello", "xyzabc"]), None);
}

#[test]
fn non_triviality_rejects_empty_output() {
    assert!(!NonTriviality.holds(&KnownWords::empty(), None));
    assert!(!NonTriviality.holds(&KnownWords::Sequence(vec![]), None));
}

#[test]
fn non_triviality_rejects_empty_string_sentinel() {
    let mut words = BTreeSet::new();
    words.insert("hello".to_string());
    words.insert(String::new());
    assert!(!NonTriviality.holds(&KnownWords::Set(words), None));
}

#[test]
fn non_triviality_accepts_ordinary_output() {
    assert!(NonTriviality.holds(&set(&["hello"]), None));
    assert!(NonTriviality.holds(&seq(&["hello"]), None));
}
