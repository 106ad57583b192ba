use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::groups::{GroupStore, TestGroup};
use crate::mutants::MutantEntry;
use crate::relations::MetamorphicRelation;
use crate::sut::{KnownWords, SpellFilter};

/// Errors that are fatal to the whole run. Per-triple failures never land
/// here; the engine records them as outcomes and keeps going.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("fixture inconsistency: {0}")]
    Fixture(String),
}

/// The record of one (mutant, relation, test group) evaluation.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub mutant: String,
    pub relation: String,
    pub group: usize,
    pub violated: bool,
    pub raised: bool,
    pub detail: String,
}

/// Catalog sanity checks that must pass before any execution starts.
pub fn validate_run(
    mutants: &[MutantEntry],
    relations: &[Box<dyn MetamorphicRelation>],
    groups: &GroupStore,
) -> Result<(), HarnessError> {
    if mutants.is_empty() {
        return Err(HarnessError::Configuration("mutant catalog is empty".into()));
    }
    for (i, entry) in mutants.iter().enumerate() {
        if mutants[..i].iter().any(|other| other.id == entry.id) {
            return Err(HarnessError::Configuration(format!(
                "duplicate mutant id: {}",
                entry.id
            )));
        }
    }
    if relations.is_empty() {
        return Err(HarnessError::Configuration("relation catalog is empty".into()));
    }
    for (i, relation) in relations.iter().enumerate() {
        if relations[..i].iter().any(|other| other.id() == relation.id()) {
            return Err(HarnessError::Configuration(format!(
                "duplicate relation id: {}",
                relation.id()
            )));
        }
        let Some(relation_groups) = groups.groups_for(relation.id()) else {
            return Err(HarnessError::Configuration(format!(
                "no test groups configured for {}",
                relation.id()
            )));
        };
        if relation_groups.is_empty() {
            return Err(HarnessError::Configuration(format!(
                "empty test group list for {}",
                relation.id()
            )));
        }
        for (g, group) in relation_groups.iter().enumerate() {
            if group.source.is_empty() {
                return Err(HarnessError::Configuration(format!(
                    "{} group {} has an empty source input",
                    relation.id(),
                    g + 1
                )));
            }
        }
    }
    Ok(())
}

/// Run every relation against the reference implementation. A violation
/// here means a broken fixture (for MR2 groups, typically a filler token
/// that drifted into the dictionary), not a detection. It is a setup
/// error, reported before any mutant executes.
pub fn validate_fixtures(
    reference: &dyn SpellFilter,
    relations: &[Box<dyn MetamorphicRelation>],
    groups: &GroupStore,
) -> Result<(), HarnessError> {
    let mut broken = Vec::new();
    for relation in relations {
        let Some(relation_groups) = groups.groups_for(relation.id()) else {
            continue;
        };
        for (g, group) in relation_groups.iter().enumerate() {
            let (violated, raised, detail) = eval_triple(reference, relation.as_ref(), group);
            if violated || raised {
                broken.push(format!("{} group {}: {}", relation.id(), g + 1, detail));
            }
        }
    }
    if broken.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::Fixture(broken.join("; ")))
    }
}

/// Evaluate the full (mutant × relation × test group) matrix. Mutants are
/// independent and the shared dictionary is read-only, so the mutant axis
/// runs on a worker pool. One instance is constructed per mutant and reused
/// across all its triples; the contract requires statelessness, and the
/// test suite checks that reuse is not observable. Outcome order follows
/// catalog order regardless of scheduling.
pub fn run_matrix(
    mutants: &[MutantEntry],
    relations: &[Box<dyn MetamorphicRelation>],
    groups: &GroupStore,
    dict: &Arc<Dictionary>,
    case_sensitive: bool,
) -> Vec<Outcome> {
    mutants
        .par_iter()
        .map(|entry| {
            let filter = entry.build(Arc::clone(dict), case_sensitive);
            let mut outcomes = Vec::new();
            for relation in relations {
                let Some(relation_groups) = groups.groups_for(relation.id()) else {
                    continue;
                };
                for (g, group) in relation_groups.iter().enumerate() {
                    let (violated, raised, detail) =
                        eval_triple(&filter, relation.as_ref(), group);
                    outcomes.push(Outcome {
                        mutant: entry.id.to_string(),
                        relation: relation.id().to_string(),
                        group: g,
                        violated,
                        raised,
                        detail,
                    });
                }
            }
            outcomes
        })
        .flatten()
        .collect()
}

/// Evaluate one triple: call the implementation on the source input, on the
/// follow-up input when the relation has one, and apply the comparator.
/// Returns (violated, raised, detail).
pub fn eval_triple(
    sut: &dyn SpellFilter,
    relation: &dyn MetamorphicRelation,
    group: &TestGroup,
) -> (bool, bool, String) {
    let source_input: Vec<&str> = group.source.iter().map(|w| w.as_str()).collect();

    let source_output = match checked_known(sut, &source_input) {
        Ok(out) => out,
        Err(e) => return (true, true, format!("source call failed: {}", e)),
    };

    let followup_input = group
        .followup
        .clone()
        .or_else(|| relation.transform(&source_input));

    let followup_output = match &followup_input {
        Some(input) => {
            let refs: Vec<&str> = input.iter().map(|w| w.as_str()).collect();
            match checked_known(sut, &refs) {
                Ok(out) => Some(out),
                Err(e) => return (true, true, format!("follow-up call failed: {}", e)),
            }
        }
        None => None,
    };

    if relation.holds(&source_output, followup_output.as_ref()) {
        (false, false, String::new())
    } else {
        let detail = match &followup_output {
            Some(fo) => output_diff(&source_output, fo),
            None => format!("output: {}", source_output.render()),
        };
        (true, false, detail)
    }
}

/// Scoped failure boundary around one SUT call: an `Err` or a panic becomes
/// an error value here, never an aborted run. Crash-as-detection is policy,
/// decided at this boundary and nowhere else.
fn checked_known(sut: &dyn SpellFilter, words: &[&str]) -> Result<KnownWords, String> {
    match catch_unwind(AssertUnwindSafe(|| sut.known(words))) {
        Ok(Ok(out)) => Ok(out),
        Ok(Err(e)) => Err(e.to_string()),
        Err(panic) => Err(panic_message(panic)),
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        format!("panicked: {}", msg)
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        format!("panicked: {}", msg)
    } else {
        "panicked".to_string()
    }
}

/// Line diff of the two rendered outputs, source first.
pub fn output_diff(source: &KnownWords, followup: &KnownWords) -> String {
    use similar::TextDiff;
    let source_lines = source.render_lines();
    let followup_lines = followup.render_lines();
    let diff = TextDiff::from_lines(source_lines.as_str(), followup_lines.as_str());
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        match change.tag() {
            similar::ChangeTag::Delete => {
                out.push_str(&format!("- {}", change));
            }
            similar::ChangeTag::Insert => {
                out.push_str(&format!("+ {}", change));
            }
            _ => {}
        }
    }
    if out.is_empty() {
        // Equal renders can still violate (set vs sequence of the same
        // words); fall back to the bracketed forms.
        out = format!("{} vs {}", source.render(), followup.render());
    }
    out
}
