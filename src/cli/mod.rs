use clap::{Args, Parser, Subcommand};

use crate::models::{AgentCreate, Configuration, StrategyCreate, SwarmCreate, UserCreate};
use crate::strategy::MarketData;

mod commands;

pub use commands::run;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Terminal client for the trading bot dashboard backend")]
pub struct Cli {
    /// Path to config file
    #[clap(short, long, default_value = "tradedash.toml")]
    pub config: String,

    /// Backend base URL, overriding the config file
    #[clap(long, env = "BACKEND_URL")]
    pub base_url: Option<String>,

    /// Debug mode
    #[clap(short, long)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage trading agents
    Agents {
        #[clap(subcommand)]
        action: AgentAction,
    },
    /// Manage trading strategies
    Strategies {
        #[clap(subcommand)]
        action: StrategyAction,
    },
    /// Manage agent swarms
    Swarms {
        #[clap(subcommand)]
        action: SwarmAction,
    },
    /// Manage dashboard users
    Users {
        #[clap(subcommand)]
        action: UserAction,
    },
    /// Show the agent board
    Board,
    /// Show the navigation sidebar
    Sidebar,
    /// Show the welcome page
    Home,
    /// Evaluate the simple moving average strategy on a price series
    Signal(SignalArgs),
}

#[derive(Subcommand, Debug)]
pub enum AgentAction {
    List,
    Get { id: String },
    Create(AgentArgs),
    Update {
        id: String,
        #[clap(flatten)]
        args: AgentArgs,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum StrategyAction {
    List,
    Get { id: String },
    Create(StrategyArgs),
    Update {
        id: String,
        #[clap(flatten)]
        args: StrategyArgs,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SwarmAction {
    List,
    Get { id: String },
    Create(SwarmArgs),
    Update {
        id: String,
        #[clap(flatten)]
        args: SwarmArgs,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    Get { id: String },
    Create(UserArgs),
    Update {
        id: String,
        #[clap(flatten)]
        args: UserArgs,
    },
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct AgentArgs {
    #[clap(long)]
    pub name: String,
    #[clap(long)]
    pub role: Option<String>,
    #[clap(long = "type")]
    pub agent_type: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
    #[clap(long)]
    pub user_id: Option<String>,
    #[clap(long)]
    pub strategy_id: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    /// JSON object of agent settings
    #[clap(long, value_parser = parse_configuration)]
    pub configuration: Option<Configuration>,
}

#[derive(Args, Debug)]
pub struct StrategyArgs {
    #[clap(long)]
    pub name: String,
    /// Strategy source, sent verbatim
    #[clap(long)]
    pub code: String,
    #[clap(long)]
    pub description: Option<String>,
    /// JSON object describing the strategy parameters
    #[clap(long, value_parser = parse_configuration)]
    pub parameters_schema: Option<Configuration>,
}

#[derive(Args, Debug)]
pub struct SwarmArgs {
    #[clap(long)]
    pub user_id: String,
    #[clap(long)]
    pub name: String,
    #[clap(long)]
    pub architecture: String,
    #[clap(long)]
    pub status: String,
    #[clap(long)]
    pub description: Option<String>,
    /// JSON object of swarm settings
    #[clap(long, value_parser = parse_configuration)]
    pub configuration: Option<Configuration>,
}

#[derive(Args, Debug)]
pub struct UserArgs {
    #[clap(long)]
    pub username: String,
    #[clap(long)]
    pub email: String,
    #[clap(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct SignalArgs {
    /// Number of trailing prices averaged
    #[clap(short, long, default_value_t = 3)]
    pub window: usize,

    /// Observations as RFC 3339 timestamp and price, e.g. 2024-05-01T00:00:00Z,101.5
    #[clap(value_parser = parse_market_data, required = true)]
    pub points: Vec<MarketData>,
}

fn parse_market_data(raw: &str) -> Result<MarketData, String> {
    let (timestamp, price) = raw
        .rsplit_once(',')
        .ok_or_else(|| "expected TIMESTAMP,PRICE".to_string())?;
    let timestamp = chrono::DateTime::parse_from_rfc3339(timestamp.trim())
        .map_err(|e| format!("invalid timestamp {:?}: {}", timestamp, e))?;
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|e| format!("invalid price {:?}: {}", price, e))?;
    if !price.is_finite() {
        return Err(format!("price must be finite, got {}", price));
    }
    Ok(MarketData::new(timestamp.with_timezone(&chrono::Utc), price))
}

fn parse_configuration(raw: &str) -> Result<Configuration, String> {
    serde_json::from_str(raw).map_err(|e| format!("expected a JSON object: {}", e))
}

impl From<AgentArgs> for AgentCreate {
    fn from(args: AgentArgs) -> Self {
        AgentCreate {
            name: args.name,
            agent_type: args.agent_type,
            role: args.role,
            description: args.description,
            user_id: args.user_id,
            strategy_id: args.strategy_id,
            status: args.status,
            configuration: args.configuration,
        }
    }
}

impl From<StrategyArgs> for StrategyCreate {
    fn from(args: StrategyArgs) -> Self {
        StrategyCreate {
            name: args.name,
            description: args.description,
            code: args.code,
            parameters_schema: args.parameters_schema,
        }
    }
}

impl From<SwarmArgs> for SwarmCreate {
    fn from(args: SwarmArgs) -> Self {
        SwarmCreate {
            user_id: args.user_id,
            name: args.name,
            description: args.description,
            architecture: args.architecture,
            configuration: args.configuration,
            status: args.status,
        }
    }
}

impl From<UserArgs> for UserCreate {
    fn from(args: UserArgs) -> Self {
        UserCreate {
            username: args.username,
            email: args.email,
            password: args.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_agent_create_arguments_map_to_payload() {
        let cli = Cli::try_parse_from([
            "tradedash",
            "agents",
            "create",
            "--name",
            "TraderBot1",
            "--role",
            "Analyzer",
            "--configuration",
            r#"{"window": 10}"#,
        ])
        .unwrap();

        let Command::Agents {
            action: AgentAction::Create(args),
        } = cli.command
        else {
            panic!("expected agents create");
        };
        let payload = AgentCreate::from(args);
        assert_eq!(payload.name, "TraderBot1");
        assert_eq!(payload.role.as_deref(), Some("Analyzer"));
        assert_eq!(payload.configuration.unwrap()["window"], json!(10));
    }

    #[test]
    fn test_signal_arguments_parse_points() {
        let cli = Cli::try_parse_from([
            "tradedash",
            "signal",
            "--window",
            "2",
            "2024-05-01T00:00:00Z,10",
            "2024-05-01T00:01:00+02:00, 11.5",
        ])
        .unwrap();

        let Command::Signal(args) = cli.command else {
            panic!("expected signal");
        };
        assert_eq!(args.window, 2);
        assert_eq!(args.points.len(), 2);
        assert_eq!(args.points[1].price, 11.5);
        assert_eq!(
            args.points[1].timestamp.to_rfc3339(),
            "2024-04-30T22:01:00+00:00"
        );
    }

    #[test]
    fn test_signal_rejects_malformed_points() {
        for bad in [
            "101.5",
            "yesterday,1",
            "2024-05-01T00:00:00Z,abc",
            "2024-05-01T00:00:00Z,NaN",
        ] {
            let result = Cli::try_parse_from(["tradedash", "signal", bad]);
            assert!(result.is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_configuration_must_be_a_json_object() {
        let result = Cli::try_parse_from([
            "tradedash",
            "swarms",
            "create",
            "--user-id",
            "u-1",
            "--name",
            "Alpha",
            "--architecture",
            "hierarchical",
            "--status",
            "active",
            "--configuration",
            "[1, 2]",
        ]);
        assert!(result.is_err());
    }
}
