use serde::{Deserialize, Serialize};

/// A group member as supplied by the external user directory. The core only
/// references participants by id and never mutates them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Participant {
    pub fn new(id: &str) -> Self {
        Participant {
            id: id.to_string(),
            name: None,
            email: None,
        }
    }
}
