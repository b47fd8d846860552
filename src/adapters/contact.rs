use crate::utils::encoding::encode_component;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
    Sent,
    /// 表單服務失敗時，交給使用者的郵件程式處理
    Fallback { mailto: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: String,
    recipient: String,
}

impl ContactClient {
    pub fn new(client: Client, endpoint: &str, recipient: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            recipient: recipient.to_string(),
        }
    }

    pub async fn submit(&self, message: &ContactMessage) -> ContactOutcome {
        let result = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(message)
            .send()
            .await;

        let reason = match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!("✉️ Contact message delivered to form endpoint");
                return ContactOutcome::Sent;
            }
            Ok(response) => format!("form endpoint returned {}", response.status()),
            Err(e) => format!("form endpoint unreachable: {}", e),
        };

        tracing::warn!("Contact submission failed ({}), falling back to mailto", reason);
        ContactOutcome::Fallback {
            mailto: mailto_url(&self.recipient, message),
            reason,
        }
    }
}

pub fn mailto_url(recipient: &str, message: &ContactMessage) -> String {
    let subject = format!("Portfolio Contact from {}", message.name);
    let body = format!(
        "{}\n\nFrom: {} ({})",
        message.message, message.name, message.email
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(&subject),
        encode_component(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_mailto_url_contents() {
        let url = mailto_url("me@example.com", &message());
        assert_eq!(
            url,
            "mailto:me@example.com?subject=Portfolio%20Contact%20from%20Ada%20Lovelace\
             &body=Hello%20there%0A%0AFrom%3A%20Ada%20Lovelace%20(ada%40example.com)"
        );
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let server = MockServer::start();
        let form_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/f/abc")
                .header("Accept", "application/json")
                .body_contains("name=Ada+Lovelace")
                .body_contains("email=ada%40example.com");
            then.status(200).json_body(serde_json::json!({"ok": true}));
        });

        let client = ContactClient::new(Client::new(), &server.url("/f/abc"), "me@example.com");
        let outcome = client.submit(&message()).await;

        form_mock.assert();
        assert_eq!(outcome, ContactOutcome::Sent);
    }

    #[tokio::test]
    async fn test_server_error_falls_back_to_mailto() {
        let server = MockServer::start();
        let form_mock = server.mock(|when, then| {
            when.method(POST).path("/f/abc");
            then.status(500);
        });

        let client = ContactClient::new(Client::new(), &server.url("/f/abc"), "me@example.com");
        let outcome = client.submit(&message()).await;

        form_mock.assert();
        match outcome {
            ContactOutcome::Fallback { mailto, reason } => {
                assert!(mailto.starts_with("mailto:me@example.com?"));
                assert!(mailto.contains("Ada%20Lovelace"));
                assert!(mailto.contains("ada%40example.com"));
                assert!(mailto.contains("Hello%20there"));
                assert!(reason.contains("500"));
            }
            other => panic!("expected mailto fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_to_mailto() {
        // 沒有服務監聽的連接埠
        let client = ContactClient::new(Client::new(), "http://127.0.0.1:9/f/abc", "me@example.com");
        let outcome = client.submit(&message()).await;
        assert!(matches!(outcome, ContactOutcome::Fallback { .. }));
    }
}
