use serde::{Deserialize, Serialize};

use super::{Configuration, Resource};

/// A trading agent as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    /// Free-form role shown on the agent board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating an agent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentCreate {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
}

impl AgentCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl Resource for Agent {
    const COLLECTION: &'static str = "agents";
    type Create = AgentCreate;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_accepts_camel_case_timestamps() {
        let agent: Agent = serde_json::from_value(json!({
            "id": "a-1",
            "name": "TraderBot1",
            "type": "analyzer",
            "configuration": {"window": 10, "symbols": ["BTC", "ETH"]},
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(agent.agent_type.as_deref(), Some("analyzer"));
        assert_eq!(agent.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(agent.updated_at.as_deref(), Some("2024-05-02T10:00:00Z"));
        let configuration = agent.configuration.unwrap();
        assert_eq!(configuration["window"], json!(10));
        assert_eq!(configuration["symbols"], json!(["BTC", "ETH"]));
    }

    #[test]
    fn test_agent_tolerates_null_configuration_and_backend_fields() {
        let agent: Agent = serde_json::from_value(json!({
            "id": "a-2",
            "name": "Scout",
            "user_id": "u-1",
            "strategy_id": "s-1",
            "status": "idle",
            "configuration": null,
            "created_at": "2024-05-01 10:00:00.123456"
        }))
        .unwrap();

        assert!(agent.configuration.is_none());
        assert_eq!(agent.status.as_deref(), Some("idle"));
        assert_eq!(agent.id(), "a-2");
    }

    #[test]
    fn test_create_payload_omits_unset_fields() {
        let payload = serde_json::to_value(AgentCreate::new("A").with_role("x")).unwrap();
        assert_eq!(payload, json!({"name": "A", "role": "x"}));
    }
}
