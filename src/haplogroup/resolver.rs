use crate::haplogroup::label::{AscentStrategy, Chromosome, HaplogroupLabel};
use crate::samples::{SampleRecord, SampleTable};

/// Knobs for the ascension search. All three are configuration, not
/// module-level defaults, so callers and tests can vary them per query.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// How many parent steps to take before giving up.
    pub max_ascents: u32,
    /// When set, a candidate also claims samples it is a nomenclature
    /// ancestor of, not only exact-label carriers.
    pub ancestor_inclusive: bool,
    pub strategy: AscentStrategy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            max_ascents: 3,
            ancestor_inclusive: false,
            strategy: AscentStrategy::Segment,
        }
    }
}

/// Why a search ended without a match. The two cases are reported
/// distinctly: hitting the root means the clade genuinely has no sampled
/// relatives upward, while an exhausted bound only means we stopped looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    RootReached,
    BoundExhausted,
}

#[derive(Debug)]
pub enum SearchOutcome<'a> {
    /// The closest label with at least one sample, plus every candidate
    /// tested on the way there.
    Matched {
        label: HaplogroupLabel,
        trail: Vec<HaplogroupLabel>,
        rows: Vec<&'a SampleRecord>,
    },
    NoMatch {
        termination: Termination,
        trail: Vec<HaplogroupLabel>,
    },
}

impl SearchOutcome<'_> {
    /// Ascension depth consumed: zero when the query itself matched.
    pub fn steps(&self) -> usize {
        match self {
            SearchOutcome::Matched { trail, .. } => trail.len(),
            SearchOutcome::NoMatch { trail, .. } => trail.len(),
        }
    }
}

/// Transient result of one resolution; constructed per query, handed to the
/// reporting collaborators, then discarded.
#[derive(Debug)]
pub struct Resolution<'a> {
    pub chromosome: Chromosome,
    pub query: HaplogroupLabel,
    /// Rows carrying the query label verbatim, kept separate so map output
    /// can mark query hits and closest-match hits differently.
    pub query_rows: Vec<&'a SampleRecord>,
    pub outcome: SearchOutcome<'a>,
}

/// Find the smallest set of closest labels with at least one sample, walking
/// parent labels from the query up to `config.max_ascents` steps or the
/// chromosome root, whichever comes first.
pub fn resolve<'a>(
    table: &'a SampleTable,
    chromosome: Chromosome,
    query: &HaplogroupLabel,
    config: &ResolverConfig,
) -> Resolution<'a> {
    let query_rows = rows_matching(table, chromosome, query, false);

    let mut trail: Vec<HaplogroupLabel> = Vec::new();
    let mut candidate = query.clone();

    let outcome = loop {
        let rows = rows_matching(table, chromosome, &candidate, config.ancestor_inclusive);
        if !rows.is_empty() {
            break SearchOutcome::Matched {
                label: candidate,
                trail,
                rows,
            };
        }
        if candidate.is_root(chromosome) {
            break SearchOutcome::NoMatch {
                termination: Termination::RootReached,
                trail,
            };
        }
        if trail.len() as u32 >= config.max_ascents {
            break SearchOutcome::NoMatch {
                termination: Termination::BoundExhausted,
                trail,
            };
        }
        // A single-segment or malformed candidate has no derivable parent;
        // the only place left to look is the root sentinel itself.
        candidate = match candidate.parent(config.strategy) {
            Some(parent) => parent,
            None => HaplogroupLabel::new(chromosome.root()),
        };
        trail.push(candidate.clone());
    };

    Resolution {
        chromosome,
        query: query.clone(),
        query_rows,
        outcome,
    }
}

/// Membership test for one candidate label. Exact matching treats a label
/// and its `~`-marked twin as the same clade, mirroring trees that place
/// some branches only approximately.
fn rows_matching<'a>(
    table: &'a SampleTable,
    chromosome: Chromosome,
    candidate: &HaplogroupLabel,
    ancestor_inclusive: bool,
) -> Vec<&'a SampleRecord> {
    table
        .records()
        .iter()
        .filter(|record| {
            chromosome
                .label_of(record)
                .is_some_and(|label| label_matches(candidate, label, ancestor_inclusive))
        })
        .collect()
}

fn label_matches(
    candidate: &HaplogroupLabel,
    sample: &HaplogroupLabel,
    ancestor_inclusive: bool,
) -> bool {
    if candidate.stem() == sample.stem() {
        return true;
    }
    ancestor_inclusive && candidate.is_prefix_of(sample)
}
