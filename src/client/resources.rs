// File: src/client/resources.rs
//! Named per-resource accessors over the generic client operations.
use super::ApiClient;
use crate::core::error::ApiError;
use crate::models::{
    Agent, AgentCreate, Strategy, StrategyCreate, Swarm, SwarmCreate, User, UserCreate,
};

impl ApiClient {
    pub async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.list::<Agent>().await
    }

    pub async fn get_agent(&self, id: &str) -> Result<Agent, ApiError> {
        self.get::<Agent>(id).await
    }

    pub async fn create_agent(&self, agent: &AgentCreate) -> Result<Agent, ApiError> {
        self.create::<Agent>(agent).await
    }

    pub async fn update_agent(&self, id: &str, agent: &AgentCreate) -> Result<Agent, ApiError> {
        self.update::<Agent>(id, agent).await
    }

    pub async fn delete_agent(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<Agent>(id).await
    }

    pub async fn list_strategies(&self) -> Result<Vec<Strategy>, ApiError> {
        self.list::<Strategy>().await
    }

    pub async fn get_strategy(&self, id: &str) -> Result<Strategy, ApiError> {
        self.get::<Strategy>(id).await
    }

    pub async fn create_strategy(&self, strategy: &StrategyCreate) -> Result<Strategy, ApiError> {
        self.create::<Strategy>(strategy).await
    }

    pub async fn update_strategy(
        &self,
        id: &str,
        strategy: &StrategyCreate,
    ) -> Result<Strategy, ApiError> {
        self.update::<Strategy>(id, strategy).await
    }

    pub async fn delete_strategy(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<Strategy>(id).await
    }

    pub async fn list_swarms(&self) -> Result<Vec<Swarm>, ApiError> {
        self.list::<Swarm>().await
    }

    pub async fn get_swarm(&self, id: &str) -> Result<Swarm, ApiError> {
        self.get::<Swarm>(id).await
    }

    pub async fn create_swarm(&self, swarm: &SwarmCreate) -> Result<Swarm, ApiError> {
        self.create::<Swarm>(swarm).await
    }

    pub async fn update_swarm(&self, id: &str, swarm: &SwarmCreate) -> Result<Swarm, ApiError> {
        self.update::<Swarm>(id, swarm).await
    }

    pub async fn delete_swarm(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<Swarm>(id).await
    }

    // The backend exposes no user listing
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get::<User>(id).await
    }

    pub async fn create_user(&self, user: &UserCreate) -> Result<User, ApiError> {
        self.create::<User>(user).await
    }

    pub async fn update_user(&self, id: &str, user: &UserCreate) -> Result<User, ApiError> {
        self.update::<User>(id, user).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<User>(id).await
    }
}
