use log::info;

use super::{MarketData, Signal, Strategy};
use crate::client::AgentApi;
use crate::core::error::ApiError;
use crate::models::{Agent, AgentCreate};

/// A client-side trading agent driving one strategy
///
/// The agent's backend record carries only its name and role; the strategy
/// itself runs locally.
pub struct TradingAgent {
    name: String,
    role: String,
    strategy: Box<dyn Strategy>,
}

impl TradingAgent {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        strategy: Box<dyn Strategy>,
    ) -> Self {
        let agent = Self {
            name: name.into(),
            role: role.into(),
            strategy,
        };
        info!("Agent initialized: {} ({})", agent.name, agent.role);
        agent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Run the strategy over a price series
    pub fn process(&self, data: &[MarketData]) -> Signal {
        info!(
            "Agent {} processing {} points with {}",
            self.name,
            data.len(),
            self.strategy.name()
        );
        self.strategy.evaluate(data)
    }

    /// Backend payload describing this agent
    pub fn payload(&self) -> AgentCreate {
        AgentCreate::new(self.name.clone()).with_role(self.role.clone())
    }

    /// Create this agent on the backend
    pub async fn register<A: AgentApi + ?Sized>(&self, api: &A) -> Result<Agent, ApiError> {
        let agent = api.create_agent(&self.payload()).await?;
        info!("Agent {} created with id {}", self.name, agent.id);
        Ok(agent)
    }

    /// Push this agent's name and role to an existing backend record
    pub async fn sync<A: AgentApi + ?Sized>(&self, api: &A, id: &str) -> Result<Agent, ApiError> {
        let agent = api.update_agent(id, &self.payload()).await?;
        info!("Updated information for agent {}", id);
        Ok(agent)
    }
}
