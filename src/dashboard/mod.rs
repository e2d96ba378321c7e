//! Local view state for the dashboard pages.
//!
//! Each view owns its own copy of fetched records; views never share or
//! reconcile state with each other.
pub mod agent_board;
pub mod home;
pub mod sidebar;
pub mod state;

pub use agent_board::{AgentBoard, AgentForm};
pub use sidebar::{NavItem, NavSection, Sidebar};
pub use state::LocalList;
