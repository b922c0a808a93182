mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn hot_source_crud_flow() -> Result<()> {
    let server = common::ensure_server().await;
    let client = reqwest::Client::new();

    let (token, _) = common::register_user(server, "alice").await?;

    // All four descriptive fields are mandatory
    let res = client
        .post(format!("{}/api/hot/sources", server.base_url))
        .header("Authorization", common::bearer(&token))
        .json(&json!({ "name": "Weibo", "url": "https://weibo.com" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/api/hot/sources", server.base_url))
        .header("Authorization", common::bearer(&token))
        .json(&json!({
            "name": "Weibo",
            "url": "https://weibo.com",
            "icon": "weibo",
            "type": "weibo",
            "enable_preview": true,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    let source_id = body["data"]["id"].as_i64().expect("source id");
    assert_eq!(body["data"]["type"], "weibo");
    assert_eq!(body["data"]["enable_preview"], true);

    // Toggling the preview flag off sticks
    let res = client
        .put(format!("{}/api/hot/sources/{}", server.base_url, source_id))
        .header("Authorization", common::bearer(&token))
        .json(&json!({
            "name": "Weibo",
            "url": "https://weibo.com",
            "icon": "weibo",
            "type": "weibo",
            "enable_preview": false,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["enable_preview"], false);

    let res = client
        .get(format!("{}/api/hot/sources", server.base_url))
        .header("Authorization", common::bearer(&token))
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["data"].as_array().expect("list").len(), 1);

    let res = client
        .delete(format!("{}/api/hot/sources/{}", server.base_url, source_id))
        .header("Authorization", common::bearer(&token))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Gone means gone
    let res = client
        .delete(format!("{}/api/hot/sources/{}", server.base_url, source_id))
        .header("Authorization", common::bearer(&token))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn hot_sources_are_owner_scoped() -> Result<()> {
    let server = common::ensure_server().await;
    let client = reqwest::Client::new();

    let (token_a, _) = common::register_user(server, "bob").await?;
    let (token_b, _) = common::register_user(server, "carol").await?;

    let res = client
        .post(format!("{}/api/hot/sources", server.base_url))
        .header("Authorization", common::bearer(&token_a))
        .json(&json!({
            "name": "Zhihu",
            "url": "https://zhihu.com",
            "icon": "zhihu",
            "type": "zhihu",
        }))
        .send()
        .await?;
    let body: Value = res.json().await?;
    let source_id = body["data"]["id"].as_i64().expect("source id");

    let res = client
        .put(format!("{}/api/hot/sources/{}", server.base_url, source_id))
        .header("Authorization", common::bearer(&token_b))
        .json(&json!({
            "name": "Stolen",
            "url": "https://zhihu.com",
            "icon": "zhihu",
            "type": "zhihu",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
