use crate::sut::KnownWords;

/// A metamorphic relation: an input transform paired with an output
/// comparator. The two vary independently: a relation may derive its
/// follow-up input (or evaluate a single input, returning `None`) and may
/// compare outputs however it likes, as long as both are pure and total
/// over any word list the harness supplies.
pub trait MetamorphicRelation: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Derive the follow-up input, or `None` for single-input relations.
    fn transform(&self, source: &[&str]) -> Option<Vec<String>>;
    /// Whether the relation holds for the observed outputs.
    fn holds(&self, source: &KnownWords, followup: Option<&KnownWords>) -> bool;
}

/// The built-in relation catalog. Callers may evaluate any other
/// `MetamorphicRelation` implementations alongside these; the engine and
/// scorer only see the trait.
pub fn relation_catalog() -> Vec<Box<dyn MetamorphicRelation>> {
    vec![
        Box::new(Permutation),
        Box::new(IrrelevantAddition),
        Box::new(CaseInvariance),
        Box::new(NonTriviality),
    ]
}

/// MR1: the order of the input words must not affect the result.
pub struct Permutation;

impl MetamorphicRelation for Permutation {
    fn id(&self) -> &str {
        "MR1"
    }

    fn name(&self) -> &str {
        "permutation invariance"
    }

    fn transform(&self, source: &[&str]) -> Option<Vec<String>> {
        let mut followup: Vec<String> = source.iter().map(|w| w.to_string()).collect();
        // Seeded so the derived permutation is a pure function of the input.
        let mut rng = fastrand::Rng::with_seed(0x6d72_3170 ^ source.len() as u64);
        rng.shuffle(&mut followup);
        Some(followup)
    }

    fn holds(&self, source: &KnownWords, followup: Option<&KnownWords>) -> bool {
        match followup {
            Some(fo) => source == fo,
            None => false,
        }
    }
}

/// Filler tokens appended by MR2. These must never coincide with a real
/// dictionary entry or the relation becomes unsound; the engine checks that
/// against the reference implementation at configuration-load time.
const FILLER_TOKENS: &[&str] = &["asdfgh", "xyz123", "qqqq"];

/// MR2: appending definitely-unknown tokens must not change what was
/// already known.
pub struct IrrelevantAddition;

impl MetamorphicRelation for IrrelevantAddition {
    fn id(&self) -> &str {
        "MR2"
    }

    fn name(&self) -> &str {
        "irrelevant addition"
    }

    fn transform(&self, source: &[&str]) -> Option<Vec<String>> {
        let mut followup: Vec<String> = source.iter().map(|w| w.to_string()).collect();
        followup.push(FILLER_TOKENS[source.len() % FILLER_TOKENS.len()].to_string());
        Some(followup)
    }

    fn holds(&self, source: &KnownWords, followup: Option<&KnownWords>) -> bool {
        match followup {
            Some(fo) => fo == source,
            None => false,
        }
    }
}

/// MR3: under default case-insensitive operation, input casing must not
/// change which words are recognized, only their casing in the output.
/// Outputs are therefore compared as lowercased sets.
pub struct CaseInvariance;

impl MetamorphicRelation for CaseInvariance {
    fn id(&self) -> &str {
        "MR3"
    }

    fn name(&self) -> &str {
        "case invariance"
    }

    fn transform(&self, source: &[&str]) -> Option<Vec<String>> {
        Some(source.iter().map(|w| toggle_case(w)).collect())
    }

    fn holds(&self, source: &KnownWords, followup: Option<&KnownWords>) -> bool {
        match followup {
            Some(fo) => source.to_lower_set() == fo.to_lower_set(),
            None => false,
        }
    }
}

/// MR4: an input holding at least one dictionary word must not produce a
/// vacuous or sentinel-polluted result. Single input, no follow-up.
pub struct NonTriviality;

impl MetamorphicRelation for NonTriviality {
    fn id(&self) -> &str {
        "MR4"
    }

    fn name(&self) -> &str {
        "non-triviality"
    }

    fn transform(&self, _source: &[&str]) -> Option<Vec<String>> {
        None
    }

    fn holds(&self, source: &KnownWords, _followup: Option<&KnownWords>) -> bool {
        !source.is_empty() && !source.contains("")
    }
}

/// Alternate the case of each character so the token still denotes the same
/// word: "hello" becomes "HeLlO".
fn toggle_case(word: &str) -> String {
    word.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            if i % 2 == 0 {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect::<Vec<_>>()
            }
        })
        .collect()
}
