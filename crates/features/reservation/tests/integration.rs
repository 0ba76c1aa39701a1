use haven_directory::Directory;
use haven_domain::{Capacity, Shelter, ShelterKey, UserId};
use haven_reservation::{MemoryStore, Reservation, ReservationError, ReservationGate};
use std::sync::Arc;

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

/// The worked example from the directory contract: one open shelter, one full.
fn sample() -> Directory {
    Directory::from_shelters(vec![
        shelter(1, "Main St", vec![Capacity::new("Adult", Some(10), Some(5))]),
        shelter(2, "North Ave", vec![Capacity::new("Adult", Some(10), Some(0))]),
        shelter(3, "Unknown House", vec![Capacity::new("Adult", Some(10), None)]),
        shelter(4, "Last Bed", vec![Capacity::new("Adult", Some(1), Some(1))]),
    ])
    .expect("unique keys")
}

#[test]
fn reserve_then_release_round_trip() {
    let gate = ReservationGate::in_memory(sample());
    let user = UserId::from("u1");

    assert!(gate.can_reserve(&user));
    let Reservation { shelter, .. } = gate.reserve(&user, ShelterKey(1)).expect("space available");
    assert_eq!(shelter, ShelterKey(1));

    assert!(!gate.can_reserve(&user));
    assert_eq!(gate.active(&user), Some(ShelterKey(1)));

    assert_eq!(gate.release(&user), Some(ShelterKey(1)));
    assert!(gate.can_reserve(&user));
    assert_eq!(gate.release(&user), None, "release is idempotent");
}

#[test]
fn second_reserve_fails_regardless_of_shelter() {
    let gate = ReservationGate::in_memory(sample());
    let user = UserId::from("u1");

    gate.reserve(&user, ShelterKey(1)).expect("first succeeds");
    let err = gate.reserve(&user, ShelterKey(4)).unwrap_err();
    assert_eq!(err, ReservationError::AlreadyReserved { user: user.clone() });

    // The key is resolved before the flag check, so an unknown key is still
    // reported as the precondition violation it is.
    let err = gate.reserve(&user, ShelterKey(99)).unwrap_err();
    assert_eq!(err, ReservationError::NotFound { key: ShelterKey(99) });
}

#[test]
fn full_shelter_reports_no_space() {
    let gate = ReservationGate::in_memory(sample());
    let err = gate.reserve(&UserId::from("u2"), ShelterKey(2)).unwrap_err();
    assert_eq!(err, ReservationError::NoSpaceAvailable { key: ShelterKey(2) });
}

#[test]
fn unknown_availability_never_counts() {
    let gate = ReservationGate::in_memory(sample());
    let err = gate.reserve(&UserId::from("u2"), ShelterKey(3)).unwrap_err();
    assert_eq!(err, ReservationError::NoSpaceAvailable { key: ShelterKey(3) });
}

#[test]
fn holds_exhaust_availability() {
    let gate = ReservationGate::in_memory(sample());

    gate.reserve(&UserId::from("u1"), ShelterKey(4)).expect("last bed");
    let err = gate.reserve(&UserId::from("u2"), ShelterKey(4)).unwrap_err();
    assert_eq!(err, ReservationError::NoSpaceAvailable { key: ShelterKey(4) });

    // Releasing returns the held bed.
    gate.release(&UserId::from("u1"));
    gate.reserve(&UserId::from("u2"), ShelterKey(4)).expect("bed returned");
}

#[test]
fn has_availability_subtracts_holds() {
    let dir = sample();
    let gate = ReservationGate::in_memory(dir.clone());
    let last_bed = dir.get(ShelterKey(4)).expect("exists");

    assert!(gate.has_availability(&last_bed));
    gate.reserve(&UserId::from("u1"), ShelterKey(4)).expect("last bed");
    assert!(!gate.has_availability(&last_bed));
}

#[test]
fn commits_reach_the_store() {
    let store = Arc::new(MemoryStore::new());
    let gate = ReservationGate::new(sample(), store.clone());
    let user = UserId::from("u1");

    gate.reserve(&user, ShelterKey(1)).expect("space available");
    assert_eq!(store.committed(&user), Some(ShelterKey(1)));

    gate.release(&user);
    assert_eq!(store.committed(&user), None);
}

#[test]
fn concurrent_reserves_for_one_user_admit_exactly_one() {
    let gate = Arc::new(ReservationGate::in_memory(sample()));
    let user = UserId::from("contended");

    let successes: usize = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let gate = Arc::clone(&gate);
                let user = user.clone();
                scope.spawn(move || gate.reserve(&user, ShelterKey(1)).is_ok())
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("no panic")).filter(|ok| *ok).count()
    });

    assert_eq!(successes, 1);
    assert_eq!(gate.active(&user), Some(ShelterKey(1)));
}

#[test]
fn worked_example_from_contract() {
    let dir = Directory::from_shelters(vec![
        shelter(1, "Main St", vec![Capacity::new("Adult", Some(5), Some(5))]),
        shelter(2, "North Ave", vec![Capacity::new("Adult", Some(5), Some(0))]),
    ])
    .expect("unique keys");

    let hits = dir.match_name("main");
    assert_eq!(hits.len(), 1);
    assert!(hits.contains(&ShelterKey(1)));

    let gate = ReservationGate::in_memory(dir);
    let u1 = UserId::from("u1");
    let u2 = UserId::from("u2");

    assert!(gate.can_reserve(&u1));
    gate.reserve(&u1, ShelterKey(1)).expect("success");
    assert!(!gate.can_reserve(&u1));

    let err = gate.reserve(&u2, ShelterKey(2)).unwrap_err();
    assert_eq!(err, ReservationError::NoSpaceAvailable { key: ShelterKey(2) });
}
