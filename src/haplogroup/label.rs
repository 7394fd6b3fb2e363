use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::samples::SampleRecord;

/// Which phylogeny a query runs against. Each chromosome has a fixed root
/// sentinel that terminates upward search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Chromosome {
    /// Y-DNA haplogroups, rooted at Y-Adam
    Y,
    /// Mitochondrial haplogroups, rooted at mt-MRCA
    Mt,
}

impl Chromosome {
    pub fn root(&self) -> &'static str {
        match self {
            Chromosome::Y => "Y-Adam",
            Chromosome::Mt => "mt-MRCA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chromosome::Y => "Y",
            Chromosome::Mt => "mt",
        }
    }

    /// The haplogroup column of a sample record for this chromosome.
    pub fn label_of<'a>(&self, record: &'a SampleRecord) -> Option<&'a HaplogroupLabel> {
        match self {
            Chromosome::Y => record.y_haplogroup.as_ref(),
            Chromosome::Mt => record.mt_haplogroup.as_ref(),
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How one ascension step shortens a label. The nomenclature documentation
/// does not pin the split rule, so both readings are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AscentStrategy {
    /// Strip the trailing run of digits or letters (one clade level)
    #[default]
    Segment,
    /// Strip exactly one trailing character
    Character,
}

#[derive(PartialEq, Clone, Copy)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

fn class_of(c: char) -> CharClass {
    if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_lowercase() {
        CharClass::Lower
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// A hierarchical haplogroup nomenclature string, e.g. "R1b1a2".
///
/// Successive trailing segments denote deeper clade levels; a trailing `~`
/// marks an approximate placement and is not itself a segment. The implied
/// tree is entirely a function of the string, never a materialized structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HaplogroupLabel(String);

impl HaplogroupLabel {
    pub fn new(label: impl Into<String>) -> Self {
        HaplogroupLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label without its approximate-placement marker.
    pub fn stem(&self) -> &str {
        self.0.trim_end_matches('~')
    }

    pub fn is_root(&self, chromosome: Chromosome) -> bool {
        self.0 == chromosome.root()
    }

    /// A label that does not open with an uppercase clade designator cannot
    /// be placed in the nomenclature at all.
    pub fn is_malformed(&self) -> bool {
        !self
            .0
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
    }

    /// Topmost clade designator: the leading run of uppercase letters
    /// ("R" from "R1b1a2", "NO" from "NO1").
    pub fn top_level(&self) -> Option<&str> {
        let end = self
            .0
            .char_indices()
            .take_while(|(_, c)| c.is_ascii_uppercase())
            .map(|(i, c)| i + c.len_utf8())
            .last()?;
        Some(&self.0[..end])
    }

    /// Nomenclature segments of the stem: maximal runs of one character
    /// class. "R1b1a2" -> [R, 1, b, 1, a, 2]; separators such as the
    /// apostrophe in "L3'4" form their own runs.
    pub fn segments(&self) -> Vec<&str> {
        let stem = self.stem();
        let mut segments = Vec::new();
        let mut run_start = 0;
        let mut run_class = None;
        for (i, c) in stem.char_indices() {
            let class = class_of(c);
            match run_class {
                Some(current) if current == class => {}
                Some(_) => {
                    segments.push(&stem[run_start..i]);
                    run_start = i;
                    run_class = Some(class);
                }
                None => run_class = Some(class),
            }
        }
        if run_class.is_some() {
            segments.push(&stem[run_start..]);
        }
        segments
    }

    /// The immediate parent label under the given ascent strategy, or `None`
    /// when the label cannot be reduced further (a single segment, or a
    /// malformed label) and the next stop upward is the root sentinel.
    pub fn parent(&self, strategy: AscentStrategy) -> Option<HaplogroupLabel> {
        if self.is_malformed() {
            return None;
        }
        let stem = self.stem();
        let reduced = match strategy {
            AscentStrategy::Character => {
                let mut chars = stem.chars();
                chars.next_back()?;
                chars.as_str().to_string()
            }
            AscentStrategy::Segment => {
                let trimmed = stem.trim_end_matches(|c| class_of(c) == CharClass::Other);
                let last = trimmed.chars().next_back()?;
                let cut = trimmed.trim_end_matches(|c| class_of(c) == class_of(last));
                // drop any separator left dangling, e.g. "L3'4" -> "L3"
                cut.trim_end_matches(|c| class_of(c) == CharClass::Other)
                    .to_string()
            }
        };
        if reduced.is_empty() {
            None
        } else {
            Some(HaplogroupLabel(reduced))
        }
    }

    /// Whether `other` sits at or below this label in the implied tree:
    /// this label's segments are a prefix of the other's. Segment-wise
    /// comparison keeps "R1" from claiming "R10".
    pub fn is_prefix_of(&self, other: &HaplogroupLabel) -> bool {
        let own = self.segments();
        let theirs = other.segments();
        own.len() <= theirs.len() && own.iter().zip(&theirs).all(|(a, b)| a == b)
    }
}

impl fmt::Display for HaplogroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HaplogroupLabel {
    fn from(label: &str) -> Self {
        HaplogroupLabel(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_class_changes() {
        let label = HaplogroupLabel::from("R1b1a2");
        assert_eq!(label.segments(), vec!["R", "1", "b", "1", "a", "2"]);
        assert_eq!(HaplogroupLabel::from("NO1").segments(), vec!["NO", "1"]);
        assert_eq!(HaplogroupLabel::from("R21").segments(), vec!["R", "21"]);
    }

    #[test]
    fn tilde_is_not_a_segment() {
        let label = HaplogroupLabel::from("R1b1~");
        assert_eq!(label.segments(), vec!["R", "1", "b", "1"]);
        assert_eq!(label.stem(), "R1b1");
    }

    #[test]
    fn segment_parent_strips_one_run() {
        let parent = |s: &str| {
            HaplogroupLabel::from(s)
                .parent(AscentStrategy::Segment)
                .map(|l| l.as_str().to_string())
        };
        assert_eq!(parent("R1b1a2c"), Some("R1b1a2".into()));
        assert_eq!(parent("R21"), Some("R".into()));
        assert_eq!(parent("NO1"), Some("NO".into()));
        assert_eq!(parent("R1b1a2~"), Some("R1b1a".into()));
        assert_eq!(parent("L3'4"), Some("L3".into()));
        assert_eq!(parent("R"), None);
        assert_eq!(parent("NO"), None);
    }

    #[test]
    fn character_parent_strips_one_char() {
        let parent = |s: &str| {
            HaplogroupLabel::from(s)
                .parent(AscentStrategy::Character)
                .map(|l| l.as_str().to_string())
        };
        assert_eq!(parent("R1b1a2c"), Some("R1b1a2".into()));
        assert_eq!(parent("R21"), Some("R2".into()));
        assert_eq!(parent("R1b1a2~"), Some("R1b1a".into()));
        assert_eq!(parent("R"), None);
    }

    #[test]
    fn malformed_labels_have_no_parent() {
        let label = HaplogroupLabel::from("1b2");
        assert!(label.is_malformed());
        assert_eq!(label.parent(AscentStrategy::Segment), None);
        assert_eq!(label.top_level(), None);
    }

    #[test]
    fn top_level_is_leading_uppercase_run() {
        assert_eq!(HaplogroupLabel::from("R1b1a2").top_level(), Some("R"));
        assert_eq!(HaplogroupLabel::from("NO1a").top_level(), Some("NO"));
        assert_eq!(HaplogroupLabel::from("HV0a").top_level(), Some("HV"));
    }

    #[test]
    fn prefix_test_is_segment_aware() {
        let r1 = HaplogroupLabel::from("R1");
        assert!(r1.is_prefix_of(&HaplogroupLabel::from("R1b1a2")));
        assert!(r1.is_prefix_of(&HaplogroupLabel::from("R1")));
        assert!(!r1.is_prefix_of(&HaplogroupLabel::from("R10")));
        assert!(!HaplogroupLabel::from("R1b1a2").is_prefix_of(&r1));
    }

    #[test]
    fn root_sentinels() {
        assert!(HaplogroupLabel::from("Y-Adam").is_root(Chromosome::Y));
        assert!(HaplogroupLabel::from("mt-MRCA").is_root(Chromosome::Mt));
        assert!(!HaplogroupLabel::from("R").is_root(Chromosome::Y));
    }
}
