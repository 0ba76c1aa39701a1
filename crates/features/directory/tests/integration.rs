use haven_directory::{Directory, DirectoryError, intersect};
use haven_domain::{AgeBucket, Capacity, GenderBucket, SearchFilter, Shelter, ShelterKey};

fn shelter(key: u32, name: &str, capacities: Vec<Capacity>) -> Shelter {
    Shelter {
        key: ShelterKey(key),
        name: name.to_owned(),
        notes: String::new(),
        address: String::new(),
        restrictions: String::new(),
        phone: String::new(),
        capacities,
    }
}

fn sample() -> Directory {
    Directory::from_shelters(vec![
        shelter(1, "Main St", vec![Capacity::new("Men", Some(20), Some(5))]),
        shelter(2, "North Ave", vec![Capacity::new("Women", Some(30), Some(0))]),
        shelter(
            3,
            "Peach House",
            vec![
                Capacity::new("Children", Some(15), Some(2)),
                Capacity::new("Women", Some(10), Some(1)),
            ],
        ),
        shelter(4, "Midtown Mission", vec![Capacity::new("Young adults", None, None)]),
    ])
    .expect("unique keys")
}

#[test]
fn duplicate_keys_are_rejected() {
    let result = Directory::from_shelters(vec![
        shelter(9, "A", Vec::new()),
        shelter(9, "B", Vec::new()),
    ]);
    assert_eq!(result.unwrap_err(), DirectoryError::DuplicateKey { key: ShelterKey(9) });
}

#[test]
fn name_match_is_case_insensitive_substring() {
    let dir = sample();

    let hits = dir.match_name("main");
    assert_eq!(hits.len(), 1);
    assert!(hits.contains(&ShelterKey(1)));

    // Every hit's name actually contains the needle.
    for key in &dir.match_name("t") {
        let name = dir.get(*key).expect("hit resolves").name.to_lowercase();
        assert!(name.contains('t'));
    }

    assert!(dir.match_name("nowhere").is_empty());
}

#[test]
fn gender_match_respects_word_boundaries() {
    let dir = sample();

    let men = dir.match_gender(GenderBucket::Men);
    assert_eq!(men.len(), 1, "'Men' must not match 'Women'");
    assert!(men.contains(&ShelterKey(1)));

    let women = dir.match_gender(GenderBucket::Women);
    assert!(women.contains(&ShelterKey(2)));
    assert!(women.contains(&ShelterKey(3)));
}

#[test]
fn age_match_spans_multi_word_labels() {
    let dir = sample();
    let hits = dir.match_age(AgeBucket::YoungAdults);
    assert_eq!(hits.len(), 1);
    assert!(hits.contains(&ShelterKey(4)));
}

#[test]
fn search_intersects_active_criteria() {
    let dir = sample();

    let filter = SearchFilter::default().with_name("house").with_gender(GenderBucket::Women);
    let hits = dir.search(&filter);
    assert_eq!(hits.len(), 1);
    assert!(hits.contains(&ShelterKey(3)));
}

#[test]
fn inactive_criterion_contributes_no_restriction() {
    let dir = sample();

    // Age inactive: result equals intersect(name, S, gender).
    let with_inactive_age =
        dir.search(&SearchFilter::default().with_gender(GenderBucket::Women));
    let manual = intersect(&dir.keys(), &dir.keys(), &dir.match_gender(GenderBucket::Women));
    assert_eq!(with_inactive_age, manual);

    // No criterion at all yields the full directory.
    assert_eq!(dir.search(&SearchFilter::default()), dir.keys());
}

#[test]
fn search_is_order_independent() {
    let dir = sample();
    let a = dir.match_name("o");
    let b = dir.match_gender(GenderBucket::Women);
    let c = dir.keys();

    assert_eq!(intersect(&a, &b, &c), intersect(&c, &b, &a));
    assert_eq!(intersect(&b, &a, &c), intersect(&a, &c, &b));
}

#[test]
fn queries_return_fresh_sets() {
    let dir = sample();
    let mut first = dir.keys();
    first.clear();
    // Mutating a returned set must not affect later queries.
    assert_eq!(dir.keys().len(), 4);
}

#[test]
fn empty_directory_yields_empty_results() {
    let dir = Directory::default();
    assert!(dir.is_empty());
    assert!(dir.match_name("anything").is_empty());
    assert!(dir.search(&SearchFilter::default()).is_empty());
}
