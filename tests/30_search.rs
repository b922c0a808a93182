mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn add_engine(
    server: &common::TestServer,
    token: &str,
    name: &str,
    quick_command: Option<&str>,
) -> Result<reqwest::Response> {
    let client = reqwest::Client::new();
    let mut payload = json!({
        "name": name,
        "searchUrl": format!("https://{}.example.com/search?q=", name.to_lowercase()),
        "icon": "search",
    });
    if let Some(command) = quick_command {
        payload["quickCommand"] = json!(command);
    }

    Ok(client
        .post(format!("{}/api/search/engines", server.base_url))
        .header("Authorization", common::bearer(token))
        .json(&payload)
        .send()
        .await?)
}

#[tokio::test]
async fn engine_creation_requires_name_url_and_icon() -> Result<()> {
    let server = common::ensure_server().await;
    let client = reqwest::Client::new();

    let (token, _) = common::register_user(server, "alice").await?;

    let res = client
        .post(format!("{}/api/search/engines", server.base_url))
        .header("Authorization", common::bearer(&token))
        .json(&json!({ "name": "Incomplete" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn quick_command_conflicts_are_case_insensitive() -> Result<()> {
    let server = common::ensure_server().await;

    let (token, _) = common::register_user(server, "bob").await?;

    let res = add_engine(server, &token, "Google", Some("G")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Same command, different case, same owner: refused and names the holder
    let res = add_engine(server, &token, "GitHub", Some("g")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("\"g\""), "unexpected message: {}", message);
    assert!(message.contains("Google"), "unexpected message: {}", message);
    Ok(())
}

#[tokio::test]
async fn quick_command_check_excludes_the_row_being_updated() -> Result<()> {
    let server = common::ensure_server().await;
    let client = reqwest::Client::new();

    let (token, _) = common::register_user(server, "carol").await?;

    let res = add_engine(server, &token, "Wiki", Some("w")).await?;
    let body: Value = res.json().await?;
    let engine_id = body["data"]["id"].as_i64().expect("engine id");

    // Re-submitting its own command is not a conflict
    let res = client
        .put(format!("{}/api/search/engines/{}", server.base_url, engine_id))
        .header("Authorization", common::bearer(&token))
        .json(&json!({
            "name": "Wikipedia",
            "searchUrl": "https://en.wikipedia.org/wiki/Special:Search?search=",
            "icon": "wiki",
            "quickCommand": "W",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["name"], "Wikipedia");

    // But taking another engine's command is
    let res = add_engine(server, &token, "Weather", Some("wx")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .put(format!("{}/api/search/engines/{}", server.base_url, engine_id))
        .header("Authorization", common::bearer(&token))
        .json(&json!({
            "name": "Wikipedia",
            "searchUrl": "https://en.wikipedia.org/wiki/Special:Search?search=",
            "icon": "wiki",
            "quickCommand": "WX",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn quick_commands_are_scoped_per_owner() -> Result<()> {
    let server = common::ensure_server().await;

    let (token_a, _) = common::register_user(server, "dave").await?;
    let (token_b, _) = common::register_user(server, "erin").await?;

    let res = add_engine(server, &token_a, "Docs", Some("d")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    // The same command under a different owner is fine
    let res = add_engine(server, &token_b, "DuckDuckGo", Some("d")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn deleting_a_foreign_engine_is_a_miss() -> Result<()> {
    let server = common::ensure_server().await;
    let client = reqwest::Client::new();

    let (token_a, _) = common::register_user(server, "frank").await?;
    let (token_b, _) = common::register_user(server, "grace").await?;

    let res = add_engine(server, &token_a, "Maps", None).await?;
    let body: Value = res.json().await?;
    let engine_id = body["data"]["id"].as_i64().expect("engine id");

    let res = client
        .delete(format!("{}/api/search/engines/{}", server.base_url, engine_id))
        .header("Authorization", common::bearer(&token_b))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/api/search/engines/{}", server.base_url, engine_id))
        .header("Authorization", common::bearer(&token_a))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
