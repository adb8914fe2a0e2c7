//! HTTP-level integration tests for `GET /api/apps/script`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_app, get_auth, signup};
use serde_json::{json, Value};

async fn fetch_script(app: axum::Router, token: &str) -> String {
    let response = get_auth(app, "/api/apps/script", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = body_json(response).await;
    assert_eq!(json["message"], "Script generated successfully");
    json["data"]["script"]
        .as_str()
        .expect("script should be a string")
        .to_string()
}

#[tokio::test]
async fn empty_registry_yields_nothing_to_install() {
    let app = common::build_test_app();
    let token = signup(app.clone(), "empty@example.com").await;

    let script = fetch_script(app, &token).await;
    assert!(script.starts_with("# SetupForMe - Generated Installation Script\n"));
    assert!(script.contains("$ErrorActionPreference = 'Stop'"));
    assert!(script.contains("No applications to install."));
    assert!(!script.contains("Installation complete!"));
}

#[tokio::test]
async fn script_contains_one_block_per_app_in_order() {
    let app = common::build_test_app();
    let token = signup(app.clone(), "blocks@example.com").await;

    create_app(
        app.clone(),
        &token,
        json!({ "name": "Git", "package_id": "Git.Git" }),
    )
    .await;
    create_app(
        app.clone(),
        &token,
        json!({
            "name": "Tool",
            "download_url": "https://example.com/downloads/tool-setup.exe",
            "install_args": "/S"
        }),
    )
    .await;

    let script = fetch_script(app, &token).await;
    let git = script.find("# App 1: Git").expect("first block");
    let tool = script.find("# App 2: Tool").expect("second block");
    assert!(git < tool);

    assert!(script.contains("Install-WingetApp -Id 'Git.Git'"));
    assert!(script.contains(
        "Install-FromUrl -Url 'https://example.com/downloads/tool-setup.exe' -FileName 'tool-setup.exe' -Arguments '/S'"
    ));
    assert!(script.contains("'Processed ' + 2 + ' application(s).'"));
    assert!(script.contains("Installation complete!"));
}

#[tokio::test]
async fn hostile_values_are_quoted() {
    let app = common::build_test_app();
    let token = signup(app.clone(), "hostile@example.com").await;

    create_app(
        app.clone(),
        &token,
        json!({
            "name": "Evil'; Remove-Item -Recurse C:\\Temp; '",
            "package_id": "Evil.App",
            "install_args": "'; Stop-Computer; '"
        }),
    )
    .await;

    let script = fetch_script(app, &token).await;
    assert!(script.contains("'Evil''; Remove-Item -Recurse C:\\Temp; '''"));
    assert!(script.contains("-Arguments '''; Stop-Computer; '''"));
    assert!(!script.contains("'Evil'; Remove-Item"));
}

#[tokio::test]
async fn script_only_includes_callers_apps() {
    let app = common::build_test_app();
    let alice = signup(app.clone(), "alice@example.com").await;
    let bob = signup(app.clone(), "bob@example.com").await;

    create_app(
        app.clone(),
        &alice,
        json!({ "name": "AliceTool", "package_id": "Alice.Tool" }),
    )
    .await;
    create_app(
        app.clone(),
        &bob,
        json!({ "name": "BobTool", "package_id": "Bob.Tool" }),
    )
    .await;

    let script = fetch_script(app, &alice).await;
    assert!(script.contains("AliceTool"));
    assert!(!script.contains("BobTool"));
}
