use std::collections::BTreeSet;
use std::sync::Arc;

use metamorph::Language;
use metamorph::dictionary::Dictionary;
use metamorph::mutants::{FaultClass, mutant_catalog};
use metamorph::sut::{KnownWords, SpellFilter};

fn dict() -> Arc<Dictionary> {
    Arc::new(Dictionary::builtin(Language::English))
}

fn set(words: &[&str]) -> KnownWords {
    KnownWords::Set(words.iter().map(|w| w.to_string()).collect())
}

// --- catalog shape ---

#[test]
fn catalog_holds_thirty_mutants() {
    let catalog = mutant_catalog();
    assert_eq!(catalog.len(), 30);
    assert_eq!(catalog[0].id, "mutant_01");
    assert_eq!(catalog[29].id, "mutant_30");
}

#[test]
fn catalog_ids_are_unique() {
    let catalog = mutant_catalog();
    let ids: BTreeSet<&str> = catalog.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn catalog_faults_are_described() {
    for entry in mutant_catalog() {
        assert!(!entry.fault.is_empty(), "{} needs a fault description", entry.id);
    }
}

#[test]
fn every_mutant_is_independently_invocable() {
    let dict = dict();
    for entry in mutant_catalog() {
        let filter = entry.build(Arc::clone(&dict), false);
        let result = filter.known(&["hello", "asdfgh"]);
        assert!(result.is_ok(), "{} should not raise on well-formed input", entry.id);
    }
}

#[test]
fn instances_share_no_state() {
    let dict = dict();
    let catalog = mutant_catalog();
    let entry = catalog.iter().find(|e| e.id == "mutant_13").unwrap();
    let first = entry.build(Arc::clone(&dict), false);
    let second = entry.build(Arc::clone(&dict), false);

    let a1 = first.known(&["cat", "dog"]).unwrap();
    let b1 = second.known(&["dog", "cat"]).unwrap();
    let a2 = first.known(&["cat", "dog"]).unwrap();

    assert_eq!(a1, a2, "interleaved calls must not affect each other");
    assert_eq!(b1, set(&["dog"]));
}

#[test]
fn fault_class_labels() {
    assert_eq!(FaultClass::BooleanOperator.label(), "boolean-operator");
    assert_eq!(FaultClass::TypeContract.label(), "type-contract");
    assert_eq!(FaultClass::SentinelPollution.label(), "sentinel-pollution");
    assert_eq!(FaultClass::PredicateSubstitution.label(), "predicate-substitution");
}

// --- spot checks on individual faults ---

fn behavior(id: &str) -> impl SpellFilter {
    let catalog = mutant_catalog();
    let entry = catalog.iter().find(|e| e.id == id).unwrap();
    entry.build(dict(), false)
}

#[test]
fn empty_set_mutant_is_vacuous() {
    let m = behavior("mutant_07");
    assert_eq!(m.known(&["hello", "world"]).unwrap(), KnownWords::empty());
    assert_eq!(m.known(&[]).unwrap(), KnownWords::empty());
}

#[test]
fn echo_mutant_returns_unknown_words_too() {
    let m = behavior("mutant_08");
    assert_eq!(
        m.known(&["hello", "asdfgh"]).unwrap(),
        set(&["hello", "asdfgh"])
    );
}

#[test]
fn negated_membership_mutant_inverts_the_filter() {
    let m = behavior("mutant_04");
    assert_eq!(m.known(&["hello", "asdfgh"]).unwrap(), set(&["asdfgh"]));
}

#[test]
fn first_word_mutant_depends_on_input_order() {
    let m = behavior("mutant_13");
    assert_eq!(m.known(&["cat", "dog"]).unwrap(), set(&["cat"]));
    assert_eq!(m.known(&["dog", "cat"]).unwrap(), set(&["dog"]));
    assert_eq!(m.known(&["qqqq", "zzzzz"]).unwrap(), KnownWords::empty());
}

#[test]
fn skip_first_mutant_drops_singletons() {
    let m = behavior("mutant_18");
    assert_eq!(m.known(&["python"]).unwrap(), KnownWords::empty());
    assert_eq!(m.known(&["python", "java"]).unwrap(), set(&["java"]));
}

#[test]
fn uppercase_mutant_misses_every_word() {
    let m = behavior("mutant_16");
    assert_eq!(m.known(&["hello", "world"]).unwrap(), KnownWords::empty());
}

#[test]
fn sequence_mutant_leaks_order_and_duplicates() {
    let m = behavior("mutant_23");
    let out = m.known(&["banana", "apple", "apple"]).unwrap();
    assert_eq!(
        out,
        KnownWords::Sequence(vec![
            "banana".to_string(),
            "apple".to_string(),
            "apple".to_string(),
        ])
    );
}

#[test]
fn sentinel_mutant_pollutes_the_result() {
    let m = behavior("mutant_27");
    let out = m.known(&["hello"]).unwrap();
    assert!(out.contains(""));
    assert!(out.contains("hello"));
}

#[test]
fn half_input_mutant_truncates() {
    let m = behavior("mutant_21");
    assert_eq!(
        m.known(&["hello", "world", "test", "code"]).unwrap(),
        set(&["hello", "world"])
    );
    // A single word survives: half rounds down to zero, which keeps the
    // whole input.
    assert_eq!(m.known(&["python"]).unwrap(), set(&["python"]));
}

#[test]
fn length_membership_mutant_never_matches() {
    let m = behavior("mutant_26");
    assert_eq!(m.known(&["hello", "world"]).unwrap(), KnownWords::empty());
}

#[test]
fn case_fold_dropped_mutant_misses_mixed_case() {
    let m = behavior("mutant_02");
    assert_eq!(m.known(&["Hello", "world"]).unwrap(), set(&["world"]));
}
