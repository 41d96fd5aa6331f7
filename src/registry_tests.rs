use super::*;

fn small_registry(max_participants: u32, participants: &[&str]) -> ActivityRegistry {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            max_participants,
            participants,
        ),
    );
    ActivityRegistry::new(catalog)
}

#[test]
fn seed_catalog_is_well_formed() {
    let registry = ActivityRegistry::with_seed_catalog();
    let catalog = registry.list_activities();

    assert_eq!(catalog.len(), 9);
    for (name, activity) in &catalog {
        assert!(!activity.description.is_empty(), "{} has no description", name);
        assert!(!activity.schedule.is_empty(), "{} has no schedule", name);
        assert!(activity.max_participants > 0, "{} has zero capacity", name);
        assert!(
            activity.participants.len() <= activity.max_participants as usize,
            "{} is seeded over capacity",
            name
        );
    }
    assert!(catalog.contains_key("Chess Club"));
    assert!(catalog.contains_key("Drama Club"));
}

#[test]
fn signup_appends_to_roster() {
    let registry = small_registry(12, &["michael@mergington.edu"]);

    let message = registry
        .signup("Chess Club", "test@mergington.edu")
        .expect("signup should succeed");
    assert!(message.contains("test@mergington.edu"));
    assert!(message.contains("Chess Club"));

    let roster = registry.list_activities()["Chess Club"].participants.clone();
    // New signups go to the back; earlier signups keep their position.
    assert_eq!(roster, vec!["michael@mergington.edu", "test@mergington.edu"]);
}

#[test]
fn duplicate_signup_is_rejected_without_duplicating() {
    let registry = small_registry(12, &[]);

    registry
        .signup("Chess Club", "dup@mergington.edu")
        .expect("first signup should succeed");
    let err = registry
        .signup("Chess Club", "dup@mergington.edu")
        .expect_err("second signup should fail");
    assert_eq!(err, RegistryError::AlreadyRegistered);

    let roster = &registry.list_activities()["Chess Club"].participants;
    assert_eq!(roster.len(), 1);
}

#[test]
fn signup_to_unknown_activity_fails() {
    let registry = ActivityRegistry::with_seed_catalog();
    let err = registry
        .signup("Underwater Basket Weaving", "test@mergington.edu")
        .expect_err("unknown activity should fail");
    assert_eq!(err, RegistryError::UnknownActivity);
}

#[test]
fn signup_to_full_activity_fails() {
    let registry = small_registry(2, &["a@mergington.edu", "b@mergington.edu"]);

    let err = registry
        .signup("Chess Club", "c@mergington.edu")
        .expect_err("full activity should reject signups");
    assert_eq!(err, RegistryError::ActivityFull);

    let roster = &registry.list_activities()["Chess Club"].participants;
    assert_eq!(roster.len(), 2);
}

#[test]
fn duplicate_wins_over_full() {
    let registry = small_registry(2, &["a@mergington.edu", "b@mergington.edu"]);

    let err = registry
        .signup("Chess Club", "a@mergington.edu")
        .expect_err("duplicate on a full roster should still read as duplicate");
    assert_eq!(err, RegistryError::AlreadyRegistered);
}

#[test]
fn unregister_removes_participant() {
    let registry = small_registry(12, &["michael@mergington.edu", "daniel@mergington.edu"]);

    let message = registry
        .unregister("Chess Club", "michael@mergington.edu")
        .expect("unregister should succeed");
    assert!(message.contains("michael@mergington.edu"));
    assert!(message.contains("Chess Club"));

    let roster = &registry.list_activities()["Chess Club"].participants;
    assert_eq!(roster, &vec!["daniel@mergington.edu".to_string()]);
}

#[test]
fn unregister_of_absent_participant_fails() {
    let registry = small_registry(12, &[]);
    let err = registry
        .unregister("Chess Club", "ghost@mergington.edu")
        .expect_err("absent participant should fail");
    assert_eq!(err, RegistryError::NotRegistered);
}

#[test]
fn unregister_from_unknown_activity_fails() {
    let registry = ActivityRegistry::with_seed_catalog();
    let err = registry
        .unregister("Underwater Basket Weaving", "test@mergington.edu")
        .expect_err("unknown activity should fail");
    assert_eq!(err, RegistryError::UnknownActivity);
}

#[test]
fn signup_then_unregister_restores_count() {
    let registry = ActivityRegistry::with_seed_catalog();
    let before = registry.list_activities()["Drama Club"].participants.len();

    registry
        .signup("Drama Club", "workflow@mergington.edu")
        .expect("signup should succeed");
    assert_eq!(
        registry.list_activities()["Drama Club"].participants.len(),
        before + 1
    );

    registry
        .unregister("Drama Club", "workflow@mergington.edu")
        .expect("unregister should succeed");
    assert_eq!(
        registry.list_activities()["Drama Club"].participants.len(),
        before
    );
}

#[test]
fn clones_share_state() {
    let registry = ActivityRegistry::with_seed_catalog();
    let handle = registry.clone();

    handle
        .signup("Chess Club", "shared@mergington.edu")
        .expect("signup should succeed");

    assert!(registry.list_activities()["Chess Club"]
        .participants
        .iter()
        .any(|p| p == "shared@mergington.edu"));
}
