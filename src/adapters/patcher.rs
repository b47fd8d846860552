use crate::adapters::github::GITHUB_ACCEPT;
use crate::utils::error::{FolioError, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq)]
pub struct PatchRequest {
    pub repository: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PatchFailure {
    pub repository: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct PatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<PatchFailure>,
}

#[derive(Debug, Clone)]
pub struct PatchTarget {
    pub api_base: String,
    pub account: String,
    pub token: String,
    pub delay: Duration,
}

/// 把推導出來的描述回寫到倉庫的背景工作。
/// 呼叫端只負責送出請求，不等待結果；失敗只會出現在最後的 [`PatchReport`]。
pub struct DescriptionPatcher {
    sender: mpsc::UnboundedSender<PatchRequest>,
    worker: JoinHandle<PatchReport>,
}

impl DescriptionPatcher {
    /// 需要在 tokio runtime 內呼叫
    pub fn spawn(client: Client, target: PatchTarget) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(client, target, receiver));
        Self { sender, worker }
    }

    /// 背景工作已結束時回傳 false
    pub fn submit(&self, request: PatchRequest) -> bool {
        self.sender.send(request).is_ok()
    }

    /// 關閉佇列並等待已送出的請求處理完畢
    pub async fn finish(self) -> PatchReport {
        drop(self.sender);
        match self.worker.await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("Description patcher stopped unexpectedly: {}", e);
                PatchReport::default()
            }
        }
    }
}

async fn run_worker(
    client: Client,
    target: PatchTarget,
    mut receiver: mpsc::UnboundedReceiver<PatchRequest>,
) -> PatchReport {
    let mut report = PatchReport::default();

    while let Some(request) = receiver.recv().await {
        report.attempted += 1;
        match patch_description(&client, &target, &request).await {
            Ok(()) => {
                tracing::debug!("Patched description of {}", request.repository);
                report.succeeded += 1;
            }
            Err(e) => {
                tracing::debug!("Description patch failed for {}: {}", request.repository, e);
                report.failures.push(PatchFailure {
                    repository: request.repository.clone(),
                    error: e.to_string(),
                });
            }
        }
        // 避免觸發 API 速率限制
        tokio::time::sleep(target.delay).await;
    }

    report
}

async fn patch_description(
    client: &Client,
    target: &PatchTarget,
    request: &PatchRequest,
) -> Result<()> {
    let url = format!(
        "{}/repos/{}/{}",
        target.api_base.trim_end_matches('/'),
        target.account,
        request.repository
    );

    let response = client
        .patch(&url)
        .bearer_auth(&target.token)
        .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
        .json(&serde_json::json!({ "description": request.description }))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FolioError::UpstreamStatus {
            status: response.status().as_u16(),
            url,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;

    fn target(server: &MockServer) -> PatchTarget {
        PatchTarget {
            api_base: server.base_url(),
            account: "someone".to_string(),
            token: "secret".to_string(),
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_patch_sends_bearer_token_and_body() {
        let server = MockServer::start();
        let patch_mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/repos/someone/tool")
                .header("Authorization", "Bearer secret")
                .json_body(serde_json::json!({"description": "A derived summary."}));
            then.status(200);
        });

        let patcher = DescriptionPatcher::spawn(Client::new(), target(&server));
        assert!(patcher.submit(PatchRequest {
            repository: "tool".to_string(),
            description: "A derived summary.".to_string(),
        }));
        let report = patcher.finish().await;

        patch_mock.assert();
        assert_eq!(report.attempted, 1);
        assert_eq!(report.succeeded, 1);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_collected_not_raised() {
        let server = MockServer::start();
        let patch_mock = server.mock(|when, then| {
            when.method(PATCH).path("/repos/someone/locked");
            then.status(403);
        });

        let patcher = DescriptionPatcher::spawn(Client::new(), target(&server));
        patcher.submit(PatchRequest {
            repository: "locked".to_string(),
            description: "Something.".to_string(),
        });
        let report = patcher.finish().await;

        patch_mock.assert();
        assert_eq!(report.attempted, 1);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].repository, "locked");
        assert!(report.failures[0].error.contains("403"));
    }
}
