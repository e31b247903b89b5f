//! End-to-end checks against a live listener.

use std::net::SocketAddr;
use std::sync::Arc;

use roster_server::{RosterServer, ServerConfig, ShutdownCoordinator};
use roster_store::{ConnectionConfig, EmployeeStore};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct Running {
    base: String,
    shutdown: Arc<ShutdownCoordinator>,
    handle: JoinHandle<std::io::Result<()>>,
    _dir: tempfile::TempDir,
}

async fn start() -> Running {
    let dir = tempfile::tempdir().unwrap();
    let store =
        EmployeeStore::open(&dir.path().join("employee.db"), &ConnectionConfig::default()).unwrap();
    let server = RosterServer::new(ServerConfig::default(), store);
    let shutdown = server.shutdown().clone();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move { server.serve(listener).await });

    Running {
        base: format!("http://{addr}/api/employees"),
        shutdown,
        handle,
        _dir: dir,
    }
}

async fn json_of(resp: reqwest::Response) -> (u16, Value) {
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn create_get_update_delete_scenario() {
    let server = start().await;
    let client = reqwest::Client::new();

    let (status, body) = json_of(
        client
            .post(&server.base)
            .json(&json!({"name": "Ann", "email": "ann@x.com", "position": "Eng"}))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, 201);
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let url = format!("{}/{id}", server.base);
    let (status, body) = json_of(client.get(&url).send().await.unwrap()).await;
    assert_eq!(status, 200);
    assert_eq!(
        body["data"],
        json!({"id": id, "name": "Ann", "email": "ann@x.com", "position": "Eng"})
    );

    let (status, body) = json_of(
        client
            .put(&url)
            .json(&json!({"name": "Ann B", "email": "ann@x.com", "position": "Eng"}))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Ann B");

    let (status, _) = json_of(client.delete(&url).send().await.unwrap()).await;
    assert_eq!(status, 200);

    let (status, body) = json_of(client.get(&url).send().await.unwrap()).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);

    drop(client);
    server.shutdown.shutdown();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let server = start().await;
    let client = reqwest::Client::new();

    let create = |email: &'static str| {
        client
            .post(&server.base)
            .json(&json!({"name": "N", "email": email, "position": "P"}))
            .send()
    };
    let (_, first) = json_of(create("a@x.com").await.unwrap()).await;
    let first_id = first["data"]["id"].as_i64().unwrap();
    let _ = client
        .delete(format!("{}/{first_id}", server.base))
        .send()
        .await
        .unwrap();
    let (_, second) = json_of(create("b@x.com").await.unwrap()).await;
    assert!(second["data"]["id"].as_i64().unwrap() > first_id);

    drop(client);
    server.shutdown.shutdown();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn concurrent_creates_with_same_email_admit_one() {
    let server = start().await;
    let client = reqwest::Client::new();

    let requests = (0..6).map(|i| {
        client
            .post(&server.base)
            .json(&json!({"name": format!("N{i}"), "email": "same@x.com", "position": "P"}))
            .send()
    });
    let mut statuses = Vec::new();
    for resp in futures_join(requests).await {
        statuses.push(resp.unwrap().status().as_u16());
    }
    assert_eq!(statuses.iter().filter(|s| **s == 201).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == 409).count(), 5);

    drop(client);
    server.shutdown.shutdown();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn cors_headers_are_present() {
    let server = start().await;
    let resp = reqwest::Client::new()
        .get(&server.base)
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().contains_key("access-control-allow-origin"));

    server.shutdown.shutdown();
    server.handle.await.unwrap().unwrap();
}

/// Drive every request on its own task so they race at the server.
async fn futures_join<F, T>(futs: impl Iterator<Item = F>) -> Vec<T>
where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futs.map(tokio::spawn).collect();
    let mut out = Vec::with_capacity(handles.len());
    for handle in handles {
        out.push(handle.await.unwrap());
    }
    out
}
