use std::collections::BTreeSet;

use crate::Language;

/// Built-in English word list. A small snapshot of common words, enough to
/// back every configured test group. Keys are stored in canonical lowercase
/// form; membership of mixed-case input is the filter's job, not the
/// dictionary's.
const WORDS_EN: &[&str] = &[
    "a", "about", "air", "all", "and", "answer", "apple", "ask", "at",
    "banana", "bad", "be", "big", "bird", "black", "blue", "book", "brown",
    "but", "by", "call", "car", "cat", "child", "city", "close", "code",
    "color", "come", "day", "dog", "down", "drink", "earth", "eat", "fast",
    "feel", "find", "fire", "first", "fish", "for", "four", "from", "get",
    "give", "go", "good", "green", "have", "he", "hello", "help", "high",
    "house", "i", "in", "is", "it", "java", "jump", "know", "last", "left",
    "letter", "like", "listen", "live", "long", "look", "love", "low", "make",
    "man", "moon", "move", "music", "need", "new", "not", "number", "of",
    "old", "on", "one", "open", "or", "out", "play", "python", "quick",
    "read", "red", "right", "river", "run", "say", "see", "she", "short",
    "sleep", "slow", "small", "sound", "speak", "star", "start", "stop",
    "sun", "take", "tell", "test", "the", "they", "think", "this", "three",
    "time", "to", "tree", "turn", "two", "up", "walk", "want", "water", "we",
    "white", "with", "word", "work", "world", "write", "year", "you",
];

/// Read-only membership store shared by every SUT instance in a run.
/// Constructed once per run, never mutated afterwards.
pub struct Dictionary {
    words: BTreeSet<String>,
    language: Language,
}

impl Dictionary {
    pub fn builtin(language: Language) -> Dictionary {
        let words = match language {
            Language::English => WORDS_EN.iter().map(|w| w.to_string()).collect(),
        };
        Dictionary { words, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether a token is worth checking at all. Empty tokens, lone
    /// punctuation characters, and numeric tokens are not dictionary
    /// material.
    pub fn should_check(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if token.chars().count() == 1
            && token.chars().all(|c| c.is_ascii_punctuation())
        {
            return false;
        }
        token.parse::<f64>().is_err()
    }
}
