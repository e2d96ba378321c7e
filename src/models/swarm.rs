use serde::{Deserialize, Serialize};

use super::{Configuration, Resource};

/// A group of agents owned by a user. `architecture` and `status` are
/// free-form tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swarm {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub architecture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmCreate {
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub architecture: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
    pub status: String,
}

impl Resource for Swarm {
    const COLLECTION: &'static str = "swarms";
    type Create = SwarmCreate;

    fn id(&self) -> &str {
        &self.id
    }
}
