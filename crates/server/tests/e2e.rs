use std::net::SocketAddr;

use configs::{AppConfig, StorageBackend};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup;

struct TestApp {
    base_url: String,
}

/// Serve the real startup path on an ephemeral port over the in-memory backend.
async fn start_server(seed: bool) -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Memory;
    cfg.seed.enabled = seed;

    let app = startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_course_lifecycle() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let c = client();

    let res = c
        .post(format!("{}/admin/courses", app.base_url))
        .json(&json!({"name": "E2E Course", "description": "created over http", "price": 49.99}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["price"], 49.99);

    let res = c
        .put(format!("{}/admin/courses/{}", app.base_url, id))
        .json(&json!({"rating": 4.5}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["name"], "E2E Course");
    assert_eq!(updated["rating"], 4.5);

    let res = c.delete(format!("{}/admin/courses/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/admin/courses/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_seeded_memory_store() -> anyhow::Result<()> {
    let app = start_server(true).await?;
    let c = client();

    let students: Vec<Value> = c.get(format!("{}/admin/students", app.base_url)).send().await?.json().await?;
    assert_eq!(students.len(), 8);

    let messages: Vec<Value> = c.get(format!("{}/admin/messages", app.base_url)).send().await?.json().await?;
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[2]["senderName"], "Carol Davis");

    let res = c
        .get(format!("{}/admin/courses", app.base_url))
        .header("Origin", "http://localhost:4200")
        .send()
        .await?;
    assert_eq!(res.headers()["access-control-allow-origin"], "http://localhost:4200");
    Ok(())
}
