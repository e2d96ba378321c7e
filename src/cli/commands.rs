use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;

use super::{AgentAction, Command, SignalArgs, StrategyAction, SwarmAction, UserAction};
use crate::client::ApiClient;
use crate::dashboard::{home, AgentBoard, Sidebar};
use crate::strategy::{SimpleMovingAverage, Strategy};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{}", text);
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Execute one CLI command against the backend
pub async fn run(command: Command, client: &ApiClient) -> Result<()> {
    match command {
        Command::Agents { action } => run_agents(action, client).await,
        Command::Strategies { action } => run_strategies(action, client).await,
        Command::Swarms { action } => run_swarms(action, client).await,
        Command::Users { action } => run_users(action, client).await,
        Command::Board => {
            let mut board = AgentBoard::new(client.clone());
            board.mount().await.context("Failed to fetch agents")?;
            print_lines(&board.render());
            Ok(())
        }
        Command::Sidebar => {
            let mut sidebar = Sidebar::new();
            if sidebar.load_agents(client).await.is_err() {
                warn!("Showing sidebar without agent links");
            }
            print_lines(&sidebar.render());
            Ok(())
        }
        Command::Home => {
            print_lines(&home::render());
            Ok(())
        }
        Command::Signal(args) => run_signal(args),
    }
}

fn run_signal(args: SignalArgs) -> Result<()> {
    let strategy = SimpleMovingAverage::new("SMA", "Simple moving average", args.window)
        .context("Failed to configure strategy")?;
    println!("Signal: {}", strategy.evaluate(&args.points));
    if let Some(average) = strategy.average(&args.points) {
        println!("Average: {}", average);
    }
    Ok(())
}

async fn run_agents(action: AgentAction, client: &ApiClient) -> Result<()> {
    match action {
        AgentAction::List => {
            print_json(&client.list_agents().await.context("Failed to fetch agents")?)
        }
        AgentAction::Get { id } => print_json(
            &client
                .get_agent(&id)
                .await
                .with_context(|| format!("Failed to fetch agent {}", id))?,
        ),
        AgentAction::Create(args) => print_json(
            &client
                .create_agent(&args.into())
                .await
                .context("Failed to create agent")?,
        ),
        AgentAction::Update { id, args } => print_json(
            &client
                .update_agent(&id, &args.into())
                .await
                .with_context(|| format!("Failed to update agent {}", id))?,
        ),
        AgentAction::Delete { id } => {
            client
                .delete_agent(&id)
                .await
                .with_context(|| format!("Failed to delete agent {}", id))?;
            println!("Deleted agent {}", id);
            Ok(())
        }
    }
}

async fn run_strategies(action: StrategyAction, client: &ApiClient) -> Result<()> {
    match action {
        StrategyAction::List => print_json(
            &client
                .list_strategies()
                .await
                .context("Failed to fetch strategies")?,
        ),
        StrategyAction::Get { id } => print_json(
            &client
                .get_strategy(&id)
                .await
                .with_context(|| format!("Failed to fetch strategy {}", id))?,
        ),
        StrategyAction::Create(args) => print_json(
            &client
                .create_strategy(&args.into())
                .await
                .context("Failed to create strategy")?,
        ),
        StrategyAction::Update { id, args } => print_json(
            &client
                .update_strategy(&id, &args.into())
                .await
                .with_context(|| format!("Failed to update strategy {}", id))?,
        ),
        StrategyAction::Delete { id } => {
            client
                .delete_strategy(&id)
                .await
                .with_context(|| format!("Failed to delete strategy {}", id))?;
            println!("Deleted strategy {}", id);
            Ok(())
        }
    }
}

async fn run_swarms(action: SwarmAction, client: &ApiClient) -> Result<()> {
    match action {
        SwarmAction::List => {
            print_json(&client.list_swarms().await.context("Failed to fetch swarms")?)
        }
        SwarmAction::Get { id } => print_json(
            &client
                .get_swarm(&id)
                .await
                .with_context(|| format!("Failed to fetch swarm {}", id))?,
        ),
        SwarmAction::Create(args) => print_json(
            &client
                .create_swarm(&args.into())
                .await
                .context("Failed to create swarm")?,
        ),
        SwarmAction::Update { id, args } => print_json(
            &client
                .update_swarm(&id, &args.into())
                .await
                .with_context(|| format!("Failed to update swarm {}", id))?,
        ),
        SwarmAction::Delete { id } => {
            client
                .delete_swarm(&id)
                .await
                .with_context(|| format!("Failed to delete swarm {}", id))?;
            println!("Deleted swarm {}", id);
            Ok(())
        }
    }
}

async fn run_users(action: UserAction, client: &ApiClient) -> Result<()> {
    match action {
        UserAction::Get { id } => print_json(
            &client
                .get_user(&id)
                .await
                .with_context(|| format!("Failed to fetch user {}", id))?,
        ),
        UserAction::Create(args) => print_json(
            &client
                .create_user(&args.into())
                .await
                .context("Failed to create user")?,
        ),
        UserAction::Update { id, args } => print_json(
            &client
                .update_user(&id, &args.into())
                .await
                .with_context(|| format!("Failed to update user {}", id))?,
        ),
        UserAction::Delete { id } => {
            client
                .delete_user(&id)
                .await
                .with_context(|| format!("Failed to delete user {}", id))?;
            println!("Deleted user {}", id);
            Ok(())
        }
    }
}
