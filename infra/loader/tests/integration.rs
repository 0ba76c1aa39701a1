use haven_domain::{Capacity, Shelter, ShelterKey};
use haven_loader::{DirectoryLoader, JsonSource, LoadError, StaticSource, load_directory};

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

#[tokio::test]
async fn json_source_round_trips_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("shelters.json");
    std::fs::write(
        &path,
        r#"[
            { "key": 1, "name": "Main St", "phone": "555-0100",
              "capacities": [ { "category": "Men", "beds": 20, "available": 5 } ] },
            { "key": 2, "name": "North Ave",
              "capacities": [ { "category": "Women", "beds": -1, "available": -1 } ] }
        ]"#,
    )
    .expect("write records");

    let directory = load_directory(&JsonSource::new(&path)).await.expect("load succeeds");
    assert_eq!(directory.len(), 2);

    let north = directory.get(ShelterKey(2)).expect("present");
    assert_eq!(north.capacities[0].beds, None, "-1 sentinel resolves to None");
    assert_eq!(north.capacities[0].available, None);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let result = load_directory(&JsonSource::new("/nonexistent/shelters.json")).await;
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("shelters.json");
    std::fs::write(&path, "{ not json").expect("write");

    let result = load_directory(&JsonSource::new(&path)).await;
    assert!(matches!(result, Err(LoadError::Decode { .. })));
}

#[tokio::test]
async fn duplicate_keys_fail_validation() {
    let source = StaticSource::new(vec![
        shelter(1, "A", Vec::new()),
        shelter(1, "B", Vec::new()),
    ]);

    let result = load_directory(&source).await;
    assert!(matches!(result, Err(LoadError::Validation { .. })));
}

#[tokio::test]
async fn overfull_availability_is_clamped() {
    let source = StaticSource::new(vec![shelter(
        1,
        "Main St",
        vec![Capacity::new("Men", Some(10), Some(25))],
    )]);

    let directory = load_directory(&source).await.expect("clamping is not fatal");
    let main = directory.get(ShelterKey(1)).expect("present");
    assert_eq!(main.capacities[0].available, Some(10));
}

#[tokio::test]
async fn handle_awaits_the_publish() {
    let source = StaticSource::new(vec![shelter(
        7,
        "Peach House",
        vec![Capacity::new("Children", Some(5), Some(2))],
    )]);

    let mut handle = DirectoryLoader::spawn(source);
    let directory = handle.ready().await.expect("publish");
    assert_eq!(directory.len(), 1);

    // Subsequent waits resolve immediately with the same snapshot.
    let again = handle.ready().await.expect("still ready");
    assert_eq!(again.len(), 1);
    assert!(handle.try_snapshot().is_some());
}

#[tokio::test]
async fn failed_load_is_observable_from_every_clone() {
    let mut handle = DirectoryLoader::spawn(JsonSource::new("/nonexistent/shelters.json"));
    let mut other = handle.clone();

    assert!(matches!(handle.ready().await, Err(LoadError::Failed { .. })));
    assert!(matches!(other.ready().await, Err(LoadError::Failed { .. })));
    assert!(other.try_snapshot().is_none());
}
