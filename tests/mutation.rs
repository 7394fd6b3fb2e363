use haplomap::haplogroup::HaplogroupLabel;
use haplomap::samples::{SampleRecord, SampleTable};
use haplomap::snp::{MutationIndex, MutationIndexEntry, MutationOutcome};

fn entry(name: &str, subgroup: &str, build37: u64) -> MutationIndexEntry {
    MutationIndexEntry {
        name: name.to_string(),
        subgroup: HaplogroupLabel::from(subgroup),
        build37,
        build38: None,
        info: None,
    }
}

fn sample(y: Option<&str>) -> SampleRecord {
    SampleRecord {
        locality: String::new(),
        country: "Germany".to_string(),
        lat: Some(51.0),
        long: Some(10.0),
        y_haplogroup: y.map(HaplogroupLabel::from),
        mt_haplogroup: None,
        ages_2000: None,
        age_interval: None,
    }
}

fn index() -> MutationIndex {
    MutationIndex::from_entries(vec![
        entry("M269", "R1b", 22_739_367),
        entry("L21", "R1b1a2a1a2", 13_542_548),
    ])
    .unwrap()
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let index = index();
    assert!(index.get("M269").is_some());
    assert!(index.get("m269").is_none());
    assert!(index.get("M26").is_none());

    let table = SampleTable::from_records(vec![]);
    assert!(matches!(
        index.resolve(&table, "V1023"),
        MutationOutcome::NotFound
    ));
}

#[test]
fn found_entry_with_no_carriers_is_metadata_only() {
    let index = index();
    let table = SampleTable::from_records(vec![sample(Some("I1")), sample(None)]);

    match index.resolve(&table, "M269") {
        MutationOutcome::Found { entry, rows } => {
            assert_eq!(entry.subgroup.as_str(), "R1b");
            assert_eq!(entry.build37, 22_739_367);
            assert!(rows.is_empty());
        }
        MutationOutcome::NotFound => panic!("M269 is in the index"),
    }
}

#[test]
fn carriers_include_descendant_subclades() {
    let index = index();
    let table = SampleTable::from_records(vec![
        sample(Some("R1b")),
        sample(Some("R1b1a2")),
        sample(Some("R1a")),
        sample(Some("R10")),
        sample(None),
    ]);

    match index.resolve(&table, "M269") {
        MutationOutcome::Found { rows, .. } => {
            let labels: Vec<&str> = rows
                .iter()
                .map(|r| r.y_haplogroup.as_ref().unwrap().as_str())
                .collect();
            assert_eq!(labels, vec!["R1b", "R1b1a2"]);
        }
        MutationOutcome::NotFound => panic!("M269 is in the index"),
    }
}

#[test]
fn lookup_is_a_pure_function_of_the_name() {
    let index = index();
    let table = SampleTable::from_records(vec![sample(Some("R1b1a2"))]);

    let first = match index.resolve(&table, "M269") {
        MutationOutcome::Found { entry, rows } => (entry.name.clone(), rows.len()),
        MutationOutcome::NotFound => panic!("M269 is in the index"),
    };
    let second = match index.resolve(&table, "M269") {
        MutationOutcome::Found { entry, rows } => (entry.name.clone(), rows.len()),
        MutationOutcome::NotFound => panic!("M269 is in the index"),
    };
    assert_eq!(first, second);
}

#[test]
fn duplicate_names_are_rejected() {
    let result = MutationIndex::from_entries(vec![
        entry("M269", "R1b", 22_739_367),
        entry("M269", "R1b1", 1),
    ]);
    assert!(result.is_err());
}
