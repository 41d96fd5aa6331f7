use serde::{Deserialize, Serialize};

// One catalog entry. The activity name is the map key, not a field,
// so the struct serializes to exactly the wire shape of /activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}
