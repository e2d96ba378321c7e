use log::{error, info};

use crate::client::AgentApi;
use crate::core::error::ApiError;
use crate::models::Agent;

/// A navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

impl NavItem {
    fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    /// Link to an agent's page
    pub fn for_agent(agent: &Agent) -> Self {
        Self {
            title: agent.name.clone(),
            url: format!("/agent/{}", agent.id),
        }
    }
}

/// A collapsible group of links in the main navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: String,
    pub url: String,
    pub is_active: bool,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub plan: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarUser {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Application sidebar: static navigation plus one link per agent
/// fetched from the backend
#[derive(Debug, Clone)]
pub struct Sidebar {
    pub teams: Vec<Team>,
    pub nav_main: Vec<NavSection>,
    pub projects: Vec<Project>,
    pub user: SidebarUser,
    agent_items: Vec<NavItem>,
}

impl Default for Sidebar {
    fn default() -> Self {
        let team = |name: &str, plan: &str| Team {
            name: name.to_string(),
            plan: plan.to_string(),
        };
        let project = |name: &str| Project {
            name: name.to_string(),
            url: "#".to_string(),
        };

        Self {
            teams: vec![
                team("Acme Inc", "Enterprise"),
                team("Acme Corp.", "Startup"),
                team("Evil Corp.", "Free"),
            ],
            nav_main: vec![
                NavSection {
                    title: "Home".to_string(),
                    url: "#".to_string(),
                    is_active: true,
                    items: vec![NavItem::new("Dashboard", "/dashboard")],
                },
                NavSection {
                    title: "Models".to_string(),
                    url: "#".to_string(),
                    is_active: false,
                    items: vec![
                        NavItem::new("Agents", "#"),
                        NavItem::new("Strategies", "#"),
                        NavItem::new("Swarms", "#"),
                        NavItem::new("Blockchains", "#"),
                    ],
                },
            ],
            projects: vec![
                project("Design Engineering"),
                project("Sales & Marketing"),
                project("Travel"),
            ],
            user: SidebarUser {
                name: "shadcn".to_string(),
                email: "m@example.com".to_string(),
                avatar: "/avatars/shadcn.jpg".to_string(),
            },
            agent_items: Vec::new(),
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent_items(&self) -> &[NavItem] {
        &self.agent_items
    }

    /// Fetch agents and rebuild the dynamic navigation from them
    pub async fn load_agents(&mut self, api: &impl AgentApi) -> Result<(), ApiError> {
        match api.list_agents().await {
            Ok(agents) => {
                self.agent_items = agents.iter().map(NavItem::for_agent).collect();
                info!("Sidebar built {} agent links", self.agent_items.len());
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch navigation data: {}", e);
                Err(e)
            }
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(active) = self.teams.first() {
            lines.push(format!("[{}] {}", active.name, active.plan));
        }

        for section in &self.nav_main {
            let marker = if section.is_active { "*" } else { "-" };
            lines.push(format!("{} {}", marker, section.title));
            for item in &section.items {
                lines.push(format!("    {} -> {}", item.title, item.url));
            }
        }

        if !self.agent_items.is_empty() {
            lines.push("- Agents".to_string());
            for item in &self.agent_items {
                lines.push(format!("    {} -> {}", item.title, item.url));
            }
        }

        lines.push("- Projects".to_string());
        for project in &self.projects {
            lines.push(format!("    {} -> {}", project.name, project.url));
        }

        lines.push(format!("{} <{}>", self.user.name, self.user.email));
        lines
    }
}
