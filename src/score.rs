use serde::{Deserialize, Serialize};

use crate::mutants::MutantEntry;
use crate::relations::MetamorphicRelation;
use crate::runner::Outcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationScore {
    pub relation: String,
    pub name: String,
    pub killed: usize,
    pub survived: usize,
    pub score: f64,
}

/// One recorded violation, labelled `MRi_MGj` after its relation and group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub label: String,
    pub raised: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutantRecord {
    pub id: String,
    pub fault: String,
    pub class: String,
    pub killed: bool,
    pub killed_by: Vec<String>,
    pub violations: Vec<Violation>,
}

/// Mutants killed by exactly one relation and no other: the evidence that
/// the relation earns its place in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusiveKills {
    pub relation: String,
    pub mutants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total: usize,
    pub killed: usize,
    pub survived: usize,
    pub score: f64,
    pub per_relation: Vec<RelationScore>,
    pub killed_by_all: Vec<String>,
    pub survived_all: Vec<String>,
    pub exclusive: Vec<ExclusiveKills>,
    pub mutants: Vec<MutantRecord>,
}

/// Pure reduction of the outcome matrix. Iteration follows catalog order,
/// so identical inputs always produce an identical report.
pub fn score(
    outcomes: &[Outcome],
    mutants: &[MutantEntry],
    relations: &[Box<dyn MetamorphicRelation>],
) -> ScoreReport {
    let mut records = Vec::with_capacity(mutants.len());

    for entry in mutants {
        let mut killed_by = Vec::new();
        let mut violations = Vec::new();
        for relation in relations {
            let mut violated_here = false;
            for outcome in outcomes
                .iter()
                .filter(|o| o.mutant == entry.id && o.relation == relation.id())
            {
                if outcome.violated {
                    violated_here = true;
                    violations.push(Violation {
                        label: format!("{}_MG{}", outcome.relation, outcome.group + 1),
                        raised: outcome.raised,
                        detail: outcome.detail.clone(),
                    });
                }
            }
            if violated_here {
                killed_by.push(relation.id().to_string());
            }
        }
        records.push(MutantRecord {
            id: entry.id.to_string(),
            fault: entry.fault.to_string(),
            class: entry.class.label().to_string(),
            killed: !killed_by.is_empty(),
            killed_by,
            violations,
        });
    }

    let total = records.len();
    let killed = records.iter().filter(|r| r.killed).count();
    let survived = total - killed;
    let score = ratio(killed, total);

    let per_relation = relations
        .iter()
        .map(|relation| {
            let killed = records
                .iter()
                .filter(|r| r.killed_by.iter().any(|id| id == relation.id()))
                .count();
            RelationScore {
                relation: relation.id().to_string(),
                name: relation.name().to_string(),
                killed,
                survived: total - killed,
                score: ratio(killed, total),
            }
        })
        .collect();

    let killed_by_all = records
        .iter()
        .filter(|r| r.killed_by.len() == relations.len())
        .map(|r| r.id.clone())
        .collect();

    let survived_all = records
        .iter()
        .filter(|r| !r.killed)
        .map(|r| r.id.clone())
        .collect();

    let exclusive = relations
        .iter()
        .map(|relation| ExclusiveKills {
            relation: relation.id().to_string(),
            mutants: records
                .iter()
                .filter(|r| r.killed_by.len() == 1 && r.killed_by[0] == relation.id())
                .map(|r| r.id.clone())
                .collect(),
        })
        .collect();

    ScoreReport {
        total,
        killed,
        survived,
        score,
        per_relation,
        killed_by_all,
        survived_all,
        exclusive,
        mutants: records,
    }
}

fn ratio(killed: usize, total: usize) -> f64 {
    if total > 0 {
        killed as f64 / total as f64
    } else {
        1.0
    }
}
