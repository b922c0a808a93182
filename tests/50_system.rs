mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

// One sequential test: the public read serves the first account's config,
// so ordering between registration and updates matters.
#[tokio::test]
async fn system_config_lifecycle() -> Result<()> {
    let server = common::ensure_server().await;
    let client = reqwest::Client::new();

    // Defaults apply while no config row exists, no auth needed
    let res = client
        .get(format!("{}/api/system/config", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["site_title"], "Home Nav");
    assert_eq!(body["data"]["icp_record"], Value::Null);

    // Writing requires a token
    let res = client
        .put(format!("{}/api/system/config", server.base_url))
        .json(&json!({ "site_title": "Anonymous Nav" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // First registered user owns the public config
    let (token, _) = common::register_user(server, "admin").await?;

    // First update lazily creates the row
    let res = client
        .put(format!("{}/api/system/config", server.base_url))
        .header("Authorization", common::bearer(&token))
        .json(&json!({ "site_title": "My Nav", "icp_record": "ICP-123" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["site_title"], "My Nav");
    assert_eq!(body["data"]["icp_record"], "ICP-123");

    let res = client
        .get(format!("{}/api/system/config", server.base_url))
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["site_title"], "My Nav");

    // Patching one field leaves the other in place
    let res = client
        .put(format!("{}/api/system/config", server.base_url))
        .header("Authorization", common::bearer(&token))
        .json(&json!({ "icp_record": "ICP-456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["site_title"], "My Nav");
    assert_eq!(body["data"]["icp_record"], "ICP-456");
    Ok(())
}
