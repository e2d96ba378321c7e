// File: tests/client_resources.rs
use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;
use tradedash::client::ApiClient;
use tradedash::core::config::ApiConfig;
use tradedash::models::{StrategyCreate, SwarmCreate, UserCreate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig::new(server.base_url())).expect("client")
}

#[tokio::test]
async fn test_strategy_lifecycle_paths() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/strategies");
            then.status(200).json_body(json!([
                {"id": "s-1", "name": "SMA_10", "code": "sma(10)", "parameters_schema": {"period": {"type": "integer"}}}
            ]));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/strategies")
                .json_body(json!({"name": "EMA", "code": "ema(20)", "description": "Exponential"}));
            then.status(200).json_body(
                json!({"id": "s-2", "name": "EMA", "code": "ema(20)", "description": "Exponential"}),
            );
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/strategies/s-2");
            then.status(200).json_body(json!({"message": "Strategy deleted"}));
        })
        .await;

    let client = client_for(&server);

    let strategies = client.list_strategies().await.expect("list ok");
    assert_eq!(strategies[0].name, "SMA_10");
    assert!(strategies[0].parameters_schema.is_some());

    let created = client
        .create_strategy(&StrategyCreate {
            name: "EMA".to_string(),
            description: Some("Exponential".to_string()),
            code: "ema(20)".to_string(),
            parameters_schema: None,
        })
        .await
        .expect("create ok");
    assert_eq!(created.id, "s-2");

    client.delete_strategy(&created.id).await.expect("delete ok");

    list.assert_async().await;
    create.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_swarm_get_and_update() {
    let server = MockServer::start_async().await;
    let get = server
        .mock_async(|when, then| {
            when.method(GET).path("/swarms/w-1");
            then.status(200).json_body(json!({
                "id": "w-1", "user_id": "u-1", "name": "Alpha",
                "architecture": "hierarchical", "status": "idle", "configuration": null
            }));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/swarms/w-1").json_body(json!({
                "user_id": "u-1", "name": "Alpha", "architecture": "hierarchical",
                "status": "running", "configuration": {"max_agents": 5}
            }));
            then.status(200).json_body(json!({
                "id": "w-1", "user_id": "u-1", "name": "Alpha",
                "architecture": "hierarchical", "status": "running",
                "configuration": {"max_agents": 5}
            }));
        })
        .await;

    let client = client_for(&server);
    let swarm = client.get_swarm("w-1").await.expect("get ok");
    assert_eq!(swarm.status, "idle");
    assert!(swarm.configuration.is_none());

    let mut configuration = HashMap::new();
    configuration.insert("max_agents".to_string(), json!(5));
    let updated = client
        .update_swarm(
            &swarm.id,
            &SwarmCreate {
                user_id: swarm.user_id.clone(),
                name: swarm.name.clone(),
                description: None,
                architecture: swarm.architecture.clone(),
                configuration: Some(configuration),
                status: "running".to_string(),
            },
        )
        .await
        .expect("update ok");
    assert_eq!(updated.status, "running");

    get.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_user_create_and_fetch() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/users").json_body(json!({
                "username": "trader", "email": "trader@example.com", "password": "s3cret"
            }));
            then.status(200).json_body(json!({
                "id": "u-1", "username": "trader", "email": "trader@example.com",
                "created_at": "2024-05-01 10:00:00", "updated_at": "2024-05-01 10:00:00"
            }));
        })
        .await;
    let get = server
        .mock_async(|when, then| {
            when.method(GET).path("/users/u-1");
            then.status(200).json_body(json!({
                "id": "u-1", "username": "trader", "email": "trader@example.com",
                "created_at": "2024-05-01 10:00:00", "updated_at": "2024-05-02 08:30:00"
            }));
        })
        .await;

    let client = client_for(&server);
    let user = client
        .create_user(&UserCreate {
            username: "trader".to_string(),
            email: "trader@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .expect("create ok");
    let fetched = client.get_user(&user.id).await.expect("get ok");

    assert_eq!(fetched.username, "trader");
    assert_eq!(fetched.updated_at.as_deref(), Some("2024-05-02 08:30:00"));
    create.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn test_delete_user_failure_propagates() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/users/u-9");
            then.status(500);
        })
        .await;

    let err = client_for(&server).delete_user("u-9").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}
