use crate::core::ConfigProvider;
use crate::domain::model::RepositoryRecord;
use crate::utils::error::{FolioError, Result};
use reqwest::Client;

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// 倉庫列表與 README 的讀取端
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    raw_base: String,
    account: String,
    per_page: u32,
    fallback_branch: String,
}

impl GitHubClient {
    pub fn new<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            api_base: config.api_base().trim_end_matches('/').to_string(),
            raw_base: config.raw_base().trim_end_matches('/').to_string(),
            account: config.account().to_string(),
            per_page: config.per_page(),
            fallback_branch: config.fallback_branch().to_string(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn repositories_url(&self) -> String {
        format!("{}/users/{}/repos", self.api_base, self.account)
    }

    /// 取得帳號下所有倉庫，保留 API 回傳的順序。
    /// 非 2xx 狀態直接回傳錯誤，不做部分渲染。
    pub async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        let url = self.repositories_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", self.per_page.to_string())])
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FolioError::UpstreamStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let repositories: Vec<RepositoryRecord> = response.json().await?;
        Ok(repositories)
    }

    /// README 候選網址：預設分支（空白時用 main），再來是備援分支，重複的只試一次
    pub fn readme_candidates(&self, repository: &RepositoryRecord) -> Vec<String> {
        let primary = if repository.default_branch.trim().is_empty() {
            "main"
        } else {
            repository.default_branch.as_str()
        };

        let mut branches = vec![primary];
        if self.fallback_branch != primary {
            branches.push(self.fallback_branch.as_str());
        }

        branches
            .into_iter()
            .map(|branch| {
                format!(
                    "{}/{}/{}/{}/README.md",
                    self.raw_base, self.account, repository.name, branch
                )
            })
            .collect()
    }

    /// 依序嘗試每個候選網址，任何失敗都安靜地跳到下一個
    pub async fn fetch_readme(&self, repository: &RepositoryRecord) -> Option<String> {
        for url in self.readme_candidates(repository) {
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => match response.text().await {
                    Ok(text) => return Some(text),
                    Err(e) => tracing::debug!("README body unreadable at {}: {}", url, e),
                },
                Ok(response) => {
                    tracing::debug!("README not found at {} ({})", url, response.status())
                }
                Err(e) => tracing::debug!("README request failed for {}: {}", url, e),
            }
        }
        None
    }
}

pub fn exclude_unlisted(repositories: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    repositories.into_iter().filter(|r| r.is_listed()).collect()
}
