use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    UnknownActivity,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    ActivityFull,
}

/// Shared in-memory activity catalog. Cheap to clone; every clone sees the
/// same state, so it slots into the router the way a connection pool would.
#[derive(Clone)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityRegistry {
    pub fn new(catalog: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// The school's published club list. Rebuilt on every process start;
    /// there is deliberately no persistence behind this.
    pub fn with_seed_catalog() -> Self {
        let mut catalog = BTreeMap::new();
        for (name, activity) in seed_catalog() {
            catalog.insert(name.to_string(), activity);
        }
        Self::new(catalog)
    }

    /// Snapshot of the full catalog.
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.inner.read().clone()
    }

    /// Add a student to an activity roster. Checks run in order: existence,
    /// then duplicate, then capacity. A student who is already on the roster
    /// of a full activity gets the duplicate error, not the capacity one.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut catalog = self.inner.write();
        let activity = catalog
            .get_mut(activity_name)
            .ok_or(RegistryError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if activity.is_full() {
            return Err(RegistryError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove a student from an activity roster.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut catalog = self.inner.write();
        let activity = catalog
            .get_mut(activity_name)
            .ok_or(RegistryError::UnknownActivity)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered);
        };

        activity.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

fn seed_catalog() -> Vec<(&'static str, Activity)> {
    vec![
        (
            "Chess Club",
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            activity(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            activity(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ]
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
