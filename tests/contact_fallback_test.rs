use anyhow::Result;
use folio::adapters::github::http_client;
use folio::{ContactClient, ContactMessage, ContactOutcome, SiteConfig};
use httpmock::prelude::*;

/// 表單服務回 500 時，改為產生帶有姓名、信箱與訊息的 mailto 連結
#[tokio::test]
async fn test_form_failure_builds_mailto_from_site_config() -> Result<()> {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST).path("/f/portfolio");
        then.status(500);
    });

    let site = SiteConfig::from_toml_str(&format!(
        r#"
[contact]
endpoint = "{}"
recipient = "owner@example.com"
"#,
        server.url("/f/portfolio")
    ))?;

    let client = ContactClient::new(
        http_client()?,
        &site.contact.endpoint,
        &site.contact.recipient,
    );
    let outcome = client
        .submit(&ContactMessage {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            message: "Loved the compiler project".to_string(),
        })
        .await;

    form_mock.assert();
    let ContactOutcome::Fallback { mailto, .. } = outcome else {
        return Err(anyhow::anyhow!("expected a mailto fallback"));
    };
    assert!(mailto.starts_with("mailto:owner@example.com?subject=Portfolio%20Contact%20from%20Grace"));
    assert!(mailto.contains("grace%40example.com"));
    assert!(mailto.contains("Loved%20the%20compiler%20project"));
    Ok(())
}

#[tokio::test]
async fn test_form_success_needs_no_fallback() -> Result<()> {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/f/portfolio")
            .body_contains("message=Hi");
        then.status(200).json_body(serde_json::json!({"next": "/thanks"}));
    });

    let client = ContactClient::new(
        http_client()?,
        &server.url("/f/portfolio"),
        "owner@example.com",
    );
    let outcome = client
        .submit(&ContactMessage {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            message: "Hi".to_string(),
        })
        .await;

    form_mock.assert();
    assert_eq!(outcome, ContactOutcome::Sent);
    Ok(())
}
