use serde::{Deserialize, Serialize};

use super::{Configuration, Resource};

/// A trading strategy; `code` is stored and returned verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<Configuration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<Configuration>,
}

impl Resource for Strategy {
    const COLLECTION: &'static str = "strategies";
    type Create = StrategyCreate;

    fn id(&self) -> &str {
        &self.id
    }
}
