mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn tech_stack_create_then_list() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/techstack"))
        .json(&json!({ "name": "Rust", "category": "language", "proficiency": 90 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["name"], "Rust");
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let list = client.get(server.url("/techstack")).send().await?.json::<Value>().await?;
    assert_eq!(list["success"], true);
    assert!(list["data"].as_array().unwrap().iter().any(|t| t["id"] == id.as_str()));
    Ok(())
}

#[tokio::test]
async fn tech_stack_rejects_invalid_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let res = reqwest::Client::new()
        .post(server.url("/techstack"))
        .json(&json!({ "name": "", "category": "language", "proficiency": 140 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert!(body["fields"]["name"].is_string());
    assert!(body["fields"]["proficiency"].is_string());
    Ok(())
}

#[tokio::test]
async fn testimonials_list_newest_first() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for name in ["Ada", "Grace"] {
        let res = client
            .post(server.url("/testimonial"))
            .json(&json!({ "content": "Great to work with.", "name": name, "rating": 5 }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = res.json::<Value>().await?;
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let list = client.get(server.url("/testimonial")).send().await?.json::<Value>().await?;
    let positions: Vec<usize> = ids
        .iter()
        .map(|id| {
            list["data"]
                .as_array()
                .unwrap()
                .iter()
                .position(|t| t["id"] == id.as_str())
                .unwrap()
        })
        .collect();
    assert!(positions[1] < positions[0], "newest testimonial should come first");
    Ok(())
}
