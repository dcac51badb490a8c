//! Integration tests for the API server

use std::fs;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::time::sleep;

use lingraph::{ApiServer, AppConfig};
use lingraph_kg::{EntryCatalog, SchemaRegistry};

fn write_tables(dir: &TempDir) {
    fs::write(
        dir.path().join("entries.tsv"),
        "name\ttype\n\
         Kubota 2015\tjournal-article\n\
         NPI licensing\thypothesis\n\
         polarity\tkeyword\n\
         Smith, 12345\tauthor\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("rels_w_type.tsv"),
        "from\tfrom_type\ttype\tto\tto_type\n\
         Kubota 2015\tpublication\ttruecite\tNPI licensing\thypothesis\n\
         Smith, 12345\tauthor\tauthor_of\tKubota 2015\tpublication\n",
    )
    .unwrap();
}

/// Test helper to start the API server in the background
async fn start_test_server(dir: &TempDir, port: u16) -> tokio::task::JoinHandle<()> {
    write_tables(dir);
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        browser_url: "https://grammarxiv.net/entry".to_string(),
        author_info_cmd: None,
        names_cmd: None,
        host: "127.0.0.1".to_string(),
        port,
    };
    let catalog = EntryCatalog::load(&config.entries_path(), &config.relations_path()).unwrap();
    let server = ApiServer::new(config, SchemaRegistry::new(), catalog);
    tokio::spawn(async move {
        let _ = server.start().await;
    })
}

#[tokio::test]
async fn test_health_check() {
    let dir = TempDir::new().unwrap();
    let port = 8091;
    let _server = start_test_server(&dir, port).await;
    sleep(Duration::from_secs(1)).await;

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["entries"], 4);
    assert_eq!(body["edges"], 2);
}

#[tokio::test]
async fn test_stateless_candidates() {
    let dir = TempDir::new().unwrap();
    let port = 8092;
    let _server = start_test_server(&dir, port).await;
    sleep(Duration::from_secs(1)).await;

    let client = Client::new();
    let body: Value = client
        .get(format!(
            "http://127.0.0.1:{}/api/candidates?token=truecite",
            port
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body["candidate_types"],
        json!(["publication", "hypothesis", "framework", "data"])
    );
    assert_eq!(body["candidate_relations"], json!([]));
}

#[tokio::test]
async fn test_chain_session_flow() {
    let dir = TempDir::new().unwrap();
    let port = 8093;
    let _server = start_test_server(&dir, port).await;
    sleep(Duration::from_secs(1)).await;

    let client = Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    // Create a session
    let created: Value = client
        .post(format!("{base}/api/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["session_id"].as_str().unwrap().to_string();

    // Append a known entry name; the catalog drives the candidates
    let chain: Value = client
        .post(format!("{base}/api/sessions/{id}/chain"))
        .json(&json!({"token": "Kubota 2015"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(chain["chain"], json!(["Kubota 2015"]));
    assert_eq!(chain["candidate_types"], json!(["hypothesis", "author"]));
    assert_eq!(
        chain["candidate_relations"],
        json!(["truecite", "author_of"])
    );

    // Continue the chain and compose
    for token in ["truecite", "hypothesis"] {
        client
            .post(format!("{base}/api/sessions/{id}/chain"))
            .json(&json!({ "token": token }))
            .send()
            .await
            .unwrap();
    }
    let composed: Value = client
        .post(format!("{base}/api/sessions/{id}/queries/chain"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let expected = "match p = ({name: \"Kubota 2015\"}) -[:truecite]-> (:hypothesis) \
                    return *, relationships(p)";
    assert_eq!(composed["query"], expected);
    assert_eq!(composed["joined"], expected);
    assert!(composed["browser_url"]
        .as_str()
        .unwrap()
        .starts_with("https://grammarxiv.net/entry?cql="));

    // Clear the history and confirm the joined view is empty
    let cleared = client
        .delete(format!("{base}/api/sessions/{id}/queries/chain"))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    let text: Value = client
        .get(format!("{base}/api/sessions/{id}/queries/chain"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(text["joined"], "");
}

#[tokio::test]
async fn test_compose_fanout_and_entries_listing() {
    let dir = TempDir::new().unwrap();
    let port = 8094;
    let _server = start_test_server(&dir, port).await;
    sleep(Duration::from_secs(1)).await;

    let client = Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let created: Value = client
        .post(format!("{base}/api/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["session_id"].as_str().unwrap().to_string();

    let composed: Value = client
        .post(format!("{base}/api/sessions/{id}/queries/fan_out"))
        .json(&json!({
            "keys": ["NPI licensing"],
            "target": "publication",
            "length": 2
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let query = composed["query"].as_str().unwrap();
    assert!(query.starts_with("match p0= (a: publication) -[*..2] - ({name: \"NPI licensing\"})"));
    assert!(query.ends_with("return *, relationships(p0)"));

    // Missing target is a client error
    let bad = client
        .post(format!("{base}/api/sessions/{id}/queries/fan_out"))
        .json(&json!({"keys": ["x"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    // Picker listings
    let authors: Value = client
        .get(format!("{base}/api/entries?authors=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(authors["names"], json!(["Smith, 12345"]));

    let topics: Value = client
        .get(format!("{base}/api/entries?super_type=topic"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(topics["names"], json!(["polarity"]));
}

#[tokio::test]
async fn test_unknown_session_and_mode() {
    let dir = TempDir::new().unwrap();
    let port = 8095;
    let _server = start_test_server(&dir, port).await;
    sleep(Duration::from_secs(1)).await;

    let client = Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let missing = client
        .get(format!(
            "{base}/api/sessions/00000000-0000-0000-0000-000000000000"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let created: Value = client
        .post(format!("{base}/api/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["session_id"].as_str().unwrap().to_string();

    let bad_mode = client
        .post(format!("{base}/api/sessions/{id}/queries/banana"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_mode.status(), StatusCode::BAD_REQUEST);
}
