use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt::Debug;

pub mod agent;
pub mod strategy;
pub mod swarm;
pub mod user;

pub use agent::{Agent, AgentCreate};
pub use strategy::{Strategy, StrategyCreate};
pub use swarm::{Swarm, SwarmCreate};
pub use user::{User, UserCreate};

/// Open-ended key/value mapping; the backend enforces no schema
pub type Configuration = HashMap<String, JsonValue>;

/// Trait for backend-managed record kinds
///
/// Ties a record type to the collection path it lives under and to the
/// payload the backend accepts when creating or updating it.
pub trait Resource: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Collection path segment, e.g. `agents`
    const COLLECTION: &'static str;

    /// Payload accepted by POST and PUT
    type Create: Serialize + Debug + Send + Sync;

    /// Backend-assigned identifier
    fn id(&self) -> &str;
}
