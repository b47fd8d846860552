use crate::utils::encoding::encode_component;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;

static OG_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+property=["']og:image["'][^>]+content=["']([^"']+)["']"#).unwrap()
});
static TWITTER_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+name=["']twitter:image["'][^>]+content=["']([^"']+)["']"#).unwrap()
});
static SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// 外部專案預覽圖：先透過代理抓 HTML 找 og:image / twitter:image，
/// 找不到或失敗時改用截圖服務
#[derive(Debug, Clone)]
pub struct PreviewResolver {
    client: Client,
    proxy_base: String,
    screenshot_base: String,
}

impl PreviewResolver {
    pub fn new(client: Client, proxy_base: &str, screenshot_base: &str) -> Self {
        Self {
            client,
            proxy_base: proxy_base.trim_end_matches('/').to_string(),
            screenshot_base: screenshot_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn proxy_url(&self, url: &str) -> String {
        format!("{}/http://{}", self.proxy_base, SCHEME.replace(url, ""))
    }

    pub fn screenshot_url(&self, url: &str) -> String {
        format!(
            "{}/?url={}&screenshot=true&meta=false",
            self.screenshot_base,
            encode_component(url)
        )
    }

    pub async fn resolve(&self, url: &str) -> String {
        match self.scrape(url).await {
            Some(image) => image,
            None => self.screenshot_url(url),
        }
    }

    async fn scrape(&self, url: &str) -> Option<String> {
        let proxy_url = self.proxy_url(url);
        let response = match self.client.get(&proxy_url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::debug!("Preview proxy returned {} for {}", response.status(), url);
                return None;
            }
            Err(e) => {
                tracing::debug!("Preview proxy request failed for {}: {}", url, e);
                return None;
            }
        };

        let html = response.text().await.ok()?;
        extract_meta_image(&html)
    }
}

pub fn extract_meta_image(html: &str) -> Option<String> {
    OG_IMAGE
        .captures(html)
        .or_else(|| TWITTER_IMAGE.captures(html))
        .map(|caps| caps[1].to_string())
}
