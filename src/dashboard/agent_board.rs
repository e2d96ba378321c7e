use log::{debug, error, info};

use super::state::LocalList;
use crate::client::AgentApi;
use crate::core::error::ApiError;
use crate::models::{Agent, AgentCreate};

/// Name/role fields of the create and update forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentForm {
    pub name: String,
    pub role: String,
}

impl AgentForm {
    fn to_payload(&self) -> AgentCreate {
        AgentCreate::new(self.name.clone()).with_role(self.role.clone())
    }

    fn clear(&mut self) {
        self.name.clear();
        self.role.clear();
    }
}

/// Agent CRUD page: a list of agents, an optional selected agent and a
/// name/role form.
///
/// Every operation issues at most one request. On failure the error is
/// logged and returned and the local state is left as it was.
pub struct AgentBoard<A> {
    api: A,
    agents: LocalList<Agent>,
    form: AgentForm,
    mounted: bool,
}

impl<A: AgentApi> AgentBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            agents: LocalList::new(),
            form: AgentForm::default(),
            mounted: false,
        }
    }

    /// Fetch the agent list once; later calls do nothing
    pub async fn mount(&mut self) -> Result<(), ApiError> {
        if self.mounted {
            debug!("Agent board already mounted, skipping fetch");
            return Ok(());
        }
        self.mounted = true;

        match self.api.list_agents().await {
            Ok(agents) => {
                info!("Loaded {} agents", agents.len());
                self.agents.replace_all(agents);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching agents: {}", e);
                Err(e)
            }
        }
    }

    pub fn agents(&self) -> &LocalList<Agent> {
        &self.agents
    }

    pub fn form(&self) -> &AgentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AgentForm {
        &mut self.form
    }

    pub fn selected(&self) -> Option<&Agent> {
        self.agents.selected()
    }

    /// POST the form and append the created agent
    pub async fn create(&mut self) -> Result<Agent, ApiError> {
        let payload = self.form.to_payload();
        match self.api.create_agent(&payload).await {
            Ok(agent) => {
                self.agents.append(agent.clone());
                self.form.clear();
                Ok(agent)
            }
            Err(e) => {
                error!("Error creating agent: {}", e);
                Err(e)
            }
        }
    }

    /// Select an agent for editing and pre-fill the form from it
    pub fn select(&mut self, id: &str) -> bool {
        match self.agents.select(id) {
            Some(agent) => {
                self.form = AgentForm {
                    name: agent.name.clone(),
                    role: agent.role.clone().unwrap_or_default(),
                };
                true
            }
            None => false,
        }
    }

    /// PUT the form to the selected agent. Returns `Ok(None)` when nothing
    /// is selected.
    pub async fn update(&mut self) -> Result<Option<Agent>, ApiError> {
        let Some(id) = self.agents.selected().map(|a| a.id.clone()) else {
            debug!("No agent selected, nothing to update");
            return Ok(None);
        };

        let payload = self.form.to_payload();
        match self.api.update_agent(&id, &payload).await {
            Ok(agent) => {
                if !self.agents.replace(agent.clone()) {
                    // backend answered with a different id
                    self.agents.remove(&id);
                    self.agents.append(agent.clone());
                }
                self.agents.clear_selection();
                self.form.clear();
                Ok(Some(agent))
            }
            Err(e) => {
                error!("Error updating agent {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// DELETE an agent and drop it from the list
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        match self.api.delete_agent(id).await {
            Ok(()) => {
                self.agents.remove(id);
                self.agents.clear_selection();
                Ok(())
            }
            Err(e) => {
                error!("Error deleting agent {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// One line per agent: `name (role)`, or just `name` without a role
    pub fn render(&self) -> Vec<String> {
        self.agents
            .iter()
            .map(|agent| match &agent.role {
                Some(role) => format!("{} ({})", agent.name, role),
                None => agent.name.clone(),
            })
            .collect()
    }
}
