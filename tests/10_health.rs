mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["access-control-allow-origin"].to_str()?,
        "*"
    );

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn preflight_is_empty_no_content() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/faq/reorder", "/techstack", "/testimonial"] {
        let res = client.request(Method::OPTIONS, server.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::NO_CONTENT, "path: {}", path);

        let headers = res.headers().clone();
        assert_eq!(headers["access-control-allow-origin"].to_str()?, "*");
        assert_eq!(headers["access-control-allow-methods"].to_str()?, "GET, POST, OPTIONS");
        assert_eq!(
            headers["access-control-allow-headers"].to_str()?,
            "Content-Type, Authorization"
        );
        assert!(res.bytes().await?.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_enveloped_404() -> Result<()> {
    let server = common::ensure_server().await?;
    let res = reqwest::Client::new().get(server.url("/nope")).send().await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    Ok(())
}
