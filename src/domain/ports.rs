use crate::domain::model::{ExternalProjectEntry, RenderResult, RepositoryRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 渲染流程需要的設定來源；`SiteConfig` 是目前唯一的實作
pub trait ConfigProvider: Send + Sync {
    fn account(&self) -> &str;
    fn api_base(&self) -> &str;
    fn raw_base(&self) -> &str;
    fn per_page(&self) -> u32;
    fn fallback_branch(&self) -> &str;
    fn opengraph_base(&self) -> &str;
    fn proxy_base(&self) -> &str;
    fn screenshot_base(&self) -> &str;
    fn externals(&self) -> &[ExternalProjectEntry];
    fn output_path(&self) -> &str;
    fn github_token(&self) -> Option<String>;
    fn patch_delay(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// 取得倉庫列表並排除 fork 與封存的倉庫
    async fn extract(&self) -> Result<Vec<RepositoryRecord>>;
    /// 補齊描述並產生卡片
    async fn transform(&self, repositories: Vec<RepositoryRecord>) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
