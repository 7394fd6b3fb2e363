use haplomap::haplogroup::{
    resolve, AscentStrategy, Chromosome, HaplogroupLabel, ResolverConfig, SearchOutcome,
    Termination,
};
use haplomap::samples::{SampleRecord, SampleTable};

fn sample(country: &str, y: Option<&str>, mt: Option<&str>) -> SampleRecord {
    SampleRecord {
        locality: String::new(),
        country: country.to_string(),
        lat: Some(50.0),
        long: Some(10.0),
        y_haplogroup: y.map(HaplogroupLabel::from),
        mt_haplogroup: mt.map(HaplogroupLabel::from),
        ages_2000: None,
        age_interval: None,
    }
}

fn germany_table() -> SampleTable {
    SampleTable::from_records(vec![
        sample("Germany", Some("R1b1a2"), None),
        sample("Germany", Some("R1b1a2"), None),
        sample("Germany", Some("R1b1a"), None),
    ])
}

#[test]
fn root_query_terminates_immediately_with_empty_trail() {
    let table = germany_table();
    let config = ResolverConfig::default();

    for (chromosome, root) in [(Chromosome::Y, "Y-Adam"), (Chromosome::Mt, "mt-MRCA")] {
        let resolution = resolve(&table, chromosome, &HaplogroupLabel::from(root), &config);
        match resolution.outcome {
            SearchOutcome::NoMatch { termination, trail } => {
                assert_eq!(termination, Termination::RootReached);
                assert!(trail.is_empty());
            }
            other => panic!("expected RootReached, got {:?}", other),
        }
    }
}

#[test]
fn verbatim_label_matches_with_zero_ascension_steps() {
    let table = germany_table();
    let query = HaplogroupLabel::from("R1b1a2");
    let resolution = resolve(&table, Chromosome::Y, &query, &ResolverConfig::default());

    match resolution.outcome {
        SearchOutcome::Matched { label, trail, rows } => {
            assert_eq!(label, query);
            assert!(trail.is_empty());
            assert_eq!(rows.len(), 2);
        }
        other => panic!("expected a direct match, got {:?}", other),
    }
    assert_eq!(resolution.query_rows.len(), 2);
}

#[test]
fn ascends_one_step_to_nearest_populated_ancestor() {
    let table = germany_table();
    let query = HaplogroupLabel::from("R1b1a2c");
    let resolution = resolve(&table, Chromosome::Y, &query, &ResolverConfig::default());

    match resolution.outcome {
        SearchOutcome::Matched { label, trail, rows } => {
            assert_eq!(label.as_str(), "R1b1a2");
            assert_eq!(trail, vec![HaplogroupLabel::from("R1b1a2")]);
            // exact semantics: the shallower R1b1a row is not pulled in
            assert_eq!(rows.len(), 2);
            assert!(rows
                .iter()
                .all(|r| r.y_haplogroup.as_ref().unwrap().as_str() == "R1b1a2"));
        }
        other => panic!("expected a match after one step, got {:?}", other),
    }
}

#[test]
fn ancestor_inclusive_candidate_claims_descendants() {
    let table = SampleTable::from_records(vec![
        sample("Germany", Some("R1b1a2"), None),
        sample("Germany", Some("R1b1a2c1"), None),
    ]);
    let config = ResolverConfig {
        ancestor_inclusive: true,
        ..ResolverConfig::default()
    };
    let resolution = resolve(&table, Chromosome::Y, &HaplogroupLabel::from("R1b"), &config);

    match resolution.outcome {
        SearchOutcome::Matched { label, trail, rows } => {
            assert_eq!(label.as_str(), "R1b");
            assert!(trail.is_empty());
            assert_eq!(rows.len(), 2);
        }
        other => panic!("expected an inclusive match, got {:?}", other),
    }
}

#[test]
fn inclusive_prefix_matching_is_segment_aware() {
    // R1 must not claim R10; the search climbs to R instead
    let table = SampleTable::from_records(vec![sample("Hungary", Some("R10"), None)]);
    let config = ResolverConfig {
        ancestor_inclusive: true,
        ..ResolverConfig::default()
    };
    let resolution = resolve(&table, Chromosome::Y, &HaplogroupLabel::from("R1"), &config);

    match resolution.outcome {
        SearchOutcome::Matched { label, trail, .. } => {
            assert_eq!(label.as_str(), "R");
            assert_eq!(trail.len(), 1);
        }
        other => panic!("expected a match at R, got {:?}", other),
    }
}

#[test]
fn approximate_twin_labels_match_their_confirmed_form() {
    let table = SampleTable::from_records(vec![sample("Spain", Some("R1b1~"), None)]);
    let resolution = resolve(
        &table,
        Chromosome::Y,
        &HaplogroupLabel::from("R1b1a"),
        &ResolverConfig::default(),
    );

    match resolution.outcome {
        SearchOutcome::Matched { label, rows, .. } => {
            assert_eq!(label.as_str(), "R1b1");
            assert_eq!(rows[0].y_haplogroup.as_ref().unwrap().as_str(), "R1b1~");
        }
        other => panic!("expected the ~ twin to match, got {:?}", other),
    }
}

#[test]
fn bound_exhaustion_is_distinct_from_reaching_the_root() {
    let empty = SampleTable::from_records(vec![]);

    let deep = resolve(
        &empty,
        Chromosome::Y,
        &HaplogroupLabel::from("R1b1a2a1a"),
        &ResolverConfig {
            max_ascents: 2,
            ..ResolverConfig::default()
        },
    );
    match deep.outcome {
        SearchOutcome::NoMatch { termination, trail } => {
            assert_eq!(termination, Termination::BoundExhausted);
            assert_eq!(trail.len(), 2);
        }
        other => panic!("expected BoundExhausted, got {:?}", other),
    }

    // a top-level clade runs out of parents before the bound
    let shallow = resolve(
        &empty,
        Chromosome::Y,
        &HaplogroupLabel::from("Q"),
        &ResolverConfig::default(),
    );
    match shallow.outcome {
        SearchOutcome::NoMatch { termination, trail } => {
            assert_eq!(termination, Termination::RootReached);
            assert_eq!(trail, vec![HaplogroupLabel::from("Y-Adam")]);
        }
        other => panic!("expected RootReached, got {:?}", other),
    }
}

#[test]
fn malformed_labels_degrade_to_root_reached() {
    let table = germany_table();
    let resolution = resolve(
        &table,
        Chromosome::Y,
        &HaplogroupLabel::from("1b2"),
        &ResolverConfig::default(),
    );
    match resolution.outcome {
        SearchOutcome::NoMatch { termination, .. } => {
            assert_eq!(termination, Termination::RootReached);
        }
        other => panic!("expected RootReached for malformed input, got {:?}", other),
    }
}

#[test]
fn ascension_is_monotonic_under_both_strategies() {
    let empty = SampleTable::from_records(vec![]);
    for strategy in [AscentStrategy::Segment, AscentStrategy::Character] {
        let config = ResolverConfig {
            strategy,
            ..ResolverConfig::default()
        };
        let resolution = resolve(
            &empty,
            Chromosome::Y,
            &HaplogroupLabel::from("R1b1a2c"),
            &config,
        );
        let SearchOutcome::NoMatch { termination, trail } = resolution.outcome else {
            panic!("expected no match on an empty table");
        };
        assert_eq!(termination, Termination::BoundExhausted);
        assert_eq!(trail.len() as u32, config.max_ascents);

        let mut previous = "R1b1a2c".to_string();
        for candidate in &trail {
            assert!(candidate.as_str().len() < previous.len());
            assert!(previous.starts_with(candidate.as_str()));
            previous = candidate.as_str().to_string();
        }
    }
}

#[test]
fn character_strategy_strips_single_characters() {
    let empty = SampleTable::from_records(vec![]);
    let config = ResolverConfig {
        strategy: AscentStrategy::Character,
        ..ResolverConfig::default()
    };
    let resolution = resolve(
        &empty,
        Chromosome::Y,
        &HaplogroupLabel::from("R1b1a2c"),
        &config,
    );
    let SearchOutcome::NoMatch { trail, .. } = resolution.outcome else {
        panic!("expected no match on an empty table");
    };
    let tested: Vec<&str> = trail.iter().map(|l| l.as_str()).collect();
    assert_eq!(tested, vec!["R1b1a2", "R1b1a", "R1b1"]);
}

#[test]
fn mt_queries_search_the_mt_column() {
    let table = SampleTable::from_records(vec![sample("Finland", None, Some("U5a1a"))]);

    let on_mt = resolve(
        &table,
        Chromosome::Mt,
        &HaplogroupLabel::from("U5a1a"),
        &ResolverConfig::default(),
    );
    assert!(matches!(on_mt.outcome, SearchOutcome::Matched { .. }));

    let on_y = resolve(
        &table,
        Chromosome::Y,
        &HaplogroupLabel::from("U5a1a"),
        &ResolverConfig::default(),
    );
    assert!(matches!(on_y.outcome, SearchOutcome::NoMatch { .. }));
}
