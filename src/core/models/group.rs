use crate::core::models::participant::Participant;
use serde::{Deserialize, Serialize};

/// Minimal group view: just enough to validate that payers, split
/// participants, and settlement parties belong to the group. Group CRUD,
/// invitations, and roles live outside this crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<Participant>,
}

impl Group {
    pub fn is_member(&self, participant_id: &str) -> bool {
        self.members.iter().any(|m| m.id == participant_id)
    }
}
