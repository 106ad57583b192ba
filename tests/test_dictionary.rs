use metamorph::Language;
use metamorph::dictionary::Dictionary;

fn dict() -> Dictionary {
    Dictionary::builtin(Language::English)
}

// --- membership ---

#[test]
fn contains_common_words() {
    let d = dict();
    for word in ["hello", "world", "cat", "dog", "the", "a", "i", "python", "java"] {
        assert!(d.contains(word), "dictionary should contain {:?}", word);
    }
}

#[test]
fn does_not_contain_filler_tokens() {
    let d = dict();
    for token in [
        "asdfgh", "xyz123", "qqqq", "zzzzz", "xjkdf", "xyz", "xyzabc", "qwerty",
        "asdfzxcv", "jklqw",
    ] {
        assert!(!d.contains(token), "filler {:?} must stay out of vocabulary", token);
    }
}

#[test]
fn keys_are_lowercase() {
    let d = dict();
    assert!(d.contains("hello"));
    assert!(!d.contains("Hello"));
    assert!(!d.contains("HELLO"));
}

#[test]
fn len_is_positive() {
    let d = dict();
    assert!(d.len() > 100);
    assert!(!d.is_empty());
}

#[test]
fn language_is_recorded() {
    assert_eq!(dict().language(), Language::English);
}

// --- should_check ---

#[test]
fn should_check_accepts_ordinary_tokens() {
    let d = dict();
    assert!(d.should_check("hello"));
    assert!(d.should_check("a"));
    assert!(d.should_check("xyz123"));
}

#[test]
fn should_check_rejects_empty() {
    assert!(!dict().should_check(""));
}

#[test]
fn should_check_rejects_lone_punctuation() {
    let d = dict();
    assert!(!d.should_check("."));
    assert!(!d.should_check(","));
    assert!(!d.should_check("!"));
    // Multi-character punctuation runs are still checked; only a lone
    // punctuation character is excluded.
    assert!(d.should_check(".."));
}

#[test]
fn should_check_rejects_numeric_tokens() {
    let d = dict();
    assert!(!d.should_check("123"));
    assert!(!d.should_check("3.14"));
    assert!(!d.should_check("-7"));
    assert!(!d.should_check("1e5"));
}
