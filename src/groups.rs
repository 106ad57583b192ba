use std::collections::BTreeMap;

/// One concrete source input for a relation, with the follow-up input
/// pre-materialized when it is itself a literal. Groups lacking a follow-up
/// fall back to the relation's transform at evaluation time.
#[derive(Debug, Clone)]
pub struct TestGroup {
    pub source: Vec<String>,
    pub followup: Option<Vec<String>>,
}

impl TestGroup {
    pub fn pair(source: &[&str], followup: &[&str]) -> TestGroup {
        TestGroup {
            source: source.iter().map(|w| w.to_string()).collect(),
            followup: Some(followup.iter().map(|w| w.to_string()).collect()),
        }
    }

    pub fn single(source: &[&str]) -> TestGroup {
        TestGroup {
            source: source.iter().map(|w| w.to_string()).collect(),
            followup: None,
        }
    }
}

/// Per-relation ordered lists of test groups. Loaded once per run and never
/// mutated; the engine only reads it.
pub struct GroupStore {
    groups: BTreeMap<String, Vec<TestGroup>>,
}

impl GroupStore {
    pub fn new() -> GroupStore {
        GroupStore { groups: BTreeMap::new() }
    }

    pub fn insert(&mut self, relation: &str, groups: Vec<TestGroup>) {
        self.groups.insert(relation.to_string(), groups);
    }

    pub fn groups_for(&self, relation: &str) -> Option<&[TestGroup]> {
        self.groups.get(relation).map(|g| g.as_slice())
    }
}

impl Default for GroupStore {
    fn default() -> GroupStore {
        GroupStore::new()
    }
}

/// The hand-authored fixtures. MR1 permutes (including a duplicate-bearing
/// group), MR2 appends out-of-vocabulary fillers, MR3 re-cases, MR4 mixes at
/// least one dictionary word into otherwise-unknown tokens.
pub fn builtin_groups() -> GroupStore {
    let mut store = GroupStore::new();

    store.insert(
        "MR1",
        vec![
            TestGroup::pair(&["cat", "dog", "bird"], &["dog", "bird", "cat"]),
            TestGroup::pair(&["hello", "world"], &["world", "hello"]),
            TestGroup::pair(&["test", "python", "code"], &["code", "test", "python"]),
            TestGroup::pair(&["apple", "banana"], &["banana", "apple"]),
            TestGroup::pair(
                &["one", "two", "three", "four"],
                &["three", "one", "four", "two"],
            ),
            TestGroup::pair(&["a", "I", "to"], &["to", "I", "a"]),
            TestGroup::pair(&["apple", "apple", "banana"], &["banana", "apple", "apple"]),
        ],
    );

    store.insert(
        "MR2",
        vec![
            TestGroup::pair(
                &["hello", "world", "test"],
                &["hello", "world", "test", "asdfgh"],
            ),
            TestGroup::pair(&["cat", "dog"], &["cat", "dog", "xyz123"]),
            TestGroup::pair(&["python", "java"], &["python", "java", "qqqq"]),
            TestGroup::pair(&["apple"], &["apple", "zzzzz"]),
            TestGroup::pair(
                &["the", "quick", "brown"],
                &["the", "quick", "brown", "xjkdf"],
            ),
            TestGroup::pair(&["I", "a", "to"], &["I", "a", "to", "xyz"]),
            TestGroup::pair(
                &["hello", "world"],
                &["hello", "world", "xyzabc", "qwerty", "asdfzxcv"],
            ),
        ],
    );

    store.insert(
        "MR3",
        vec![
            TestGroup::pair(&["Hello", "World"], &["hello", "world"]),
            TestGroup::pair(&["PYTHON", "java"], &["python", "JAVA"]),
            TestGroup::pair(&["Test", "CODE"], &["test", "code"]),
            TestGroup::pair(&["Apple", "BANANA"], &["APPLE", "banana"]),
            TestGroup::pair(&["The", "QUICK", "brown"], &["THE", "quick", "BROWN"]),
            TestGroup::pair(&["A", "I"], &["a", "i"]),
            TestGroup::pair(&["THE", "and"], &["the", "AND"]),
        ],
    );

    store.insert(
        "MR4",
        vec![
            TestGroup::single(&["hello", "xyzabc"]),
            TestGroup::single(&["xyzabc", "world"]),
            TestGroup::single(&["qqqq", "test", "zzzzz"]),
            TestGroup::single(&["python"]),
            TestGroup::single(&["asdfgh", "the", "jklqw"]),
            TestGroup::single(&["a", "xyzabc"]),
            TestGroup::single(&["I", "qqqq"]),
        ],
    );

    store
}
