use crate::adapters::github::{exclude_unlisted, http_client, GitHubClient};
use crate::adapters::patcher::{DescriptionPatcher, PatchReport, PatchRequest, PatchTarget};
use crate::adapters::preview::PreviewResolver;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    DisplayCard, RenderResult, RepositoryRecord, PLACEHOLDER_DESCRIPTION,
};
use crate::domain::services::{cards, html, summary};
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Mutex;

pub const CARDS_FILE: &str = "projects.json";
pub const GRID_FILE: &str = "projects.html";

/// 描述的來源，用來決定要不要回寫
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedDescription {
    Provided(String),
    Derived(String),
    Placeholder,
}

impl ResolvedDescription {
    pub fn text(&self) -> &str {
        match self {
            ResolvedDescription::Provided(text) | ResolvedDescription::Derived(text) => text,
            ResolvedDescription::Placeholder => PLACEHOLDER_DESCRIPTION,
        }
    }
}

/// 倉庫卡片的渲染管道：抓取列表、補描述、產生卡片、寫出結果
pub struct ProjectPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) client: Client,
    github: GitHubClient,
    preview: PreviewResolver,
    patcher: Mutex<Option<DescriptionPatcher>>,
}

impl<S: Storage, C: ConfigProvider> ProjectPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = http_client()?;
        Ok(Self::with_client(storage, config, client))
    }

    pub fn with_client(storage: S, config: C, client: Client) -> Self {
        let github = GitHubClient::new(client.clone(), &config);
        let preview = PreviewResolver::new(
            client.clone(),
            config.proxy_base(),
            config.screenshot_base(),
        );

        Self {
            storage,
            config,
            client,
            github,
            preview,
            patcher: Mutex::new(None),
        }
    }

    pub async fn resolve_description(&self, repository: &RepositoryRecord) -> ResolvedDescription {
        if repository.has_description() {
            let provided = repository.description.clone().unwrap_or_default();
            return ResolvedDescription::Provided(provided);
        }

        let derived = match self.github.fetch_readme(repository).await {
            Some(markdown) => summary::summarize_readme(&markdown),
            None => None,
        };

        match derived {
            Some(one_liner) => {
                tracing::debug!("Derived description for {}: {}", repository.name, one_liner);
                ResolvedDescription::Derived(one_liner)
            }
            None => {
                tracing::debug!("No usable README for {}, using placeholder", repository.name);
                ResolvedDescription::Placeholder
            }
        }
    }

    /// 有 token 時把描述丟給背景工作，第一次呼叫才啟動
    fn queue_patch(&self, repository: &RepositoryRecord, description: &str) {
        let Some(token) = self.config.github_token() else {
            return;
        };
        let Ok(mut guard) = self.patcher.lock() else {
            return;
        };

        let patcher = guard.get_or_insert_with(|| {
            tracing::info!("🔑 Token present, description patches will be sent in the background");
            DescriptionPatcher::spawn(
                self.client.clone(),
                PatchTarget {
                    api_base: self.config.api_base().to_string(),
                    account: self.config.account().to_string(),
                    token,
                    delay: self.config.patch_delay(),
                },
            )
        });

        if !patcher.submit(PatchRequest {
            repository: repository.name.clone(),
            description: description.to_string(),
        }) {
            tracing::debug!("Description patcher is gone; skipping {}", repository.name);
        }
    }

    /// 等待背景回寫結束；沒有啟動過則回傳 None
    pub async fn finish_patches(&self) -> Option<PatchReport> {
        let patcher = self.patcher.lock().ok()?.take()?;
        Some(patcher.finish().await)
    }

    /// 從輸出位置讀回上次渲染的結果
    pub async fn read_result(&self) -> Result<RenderResult> {
        let json = self.storage.read_file(CARDS_FILE).await?;
        Ok(serde_json::from_slice(&json)?)
    }

    async fn render_repository(&self, repository: &RepositoryRecord) -> DisplayCard {
        let description = self.resolve_description(repository).await;
        if let ResolvedDescription::Derived(text) = &description {
            self.queue_patch(repository, text);
        }

        let image = cards::repository_preview_url(
            self.config.opengraph_base(),
            &cards::cache_bust_token(),
            &repository.full_name,
        );
        cards::repository_card(repository, description.text().to_string(), image)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ProjectPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RepositoryRecord>> {
        tracing::info!(
            "🚀 Fetching repositories for {} from {}",
            self.github.account(),
            self.github.repositories_url()
        );

        let repositories = self.github.list_repositories().await?;
        let fetched = repositories.len();
        let listed = exclude_unlisted(repositories);

        tracing::info!(
            "📊 Fetched {} repositories, {} after excluding forks and archived",
            fetched,
            listed.len()
        );
        Ok(listed)
    }

    async fn transform(&self, repositories: Vec<RepositoryRecord>) -> Result<RenderResult> {
        let externals = self.config.externals();
        let total_displayed = repositories.len() + externals.len();
        let mut rendered = Vec::with_capacity(total_displayed);

        // 逐一渲染，每張卡片等自己的描述解析完才加入
        for repository in &repositories {
            rendered.push(self.render_repository(repository).await);
        }

        for entry in externals {
            let image = match &entry.image {
                Some(path) if !path.trim().is_empty() => path.clone(),
                _ => self.preview.resolve(&entry.url).await,
            };
            rendered.push(cards::external_card(entry, image));
        }

        tracing::info!("✅ Rendered {} project cards", rendered.len());
        Ok(RenderResult {
            cards: rendered,
            total_displayed,
            generated_at: chrono::Utc::now(),
        })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let json = serde_json::to_string_pretty(&result)?;
        self.storage.write_file(CARDS_FILE, json.as_bytes()).await?;

        let fragment = html::render_grid(&result);
        self.storage.write_file(GRID_FILE, fragment.as_bytes()).await?;

        let output_path = format!("{}/{}", self.config.output_path(), CARDS_FILE);
        tracing::info!("💾 Saved {} cards to {}", result.cards.len(), output_path);
        Ok(output_path)
    }
}
