use crate::core::ConfigProvider;
use crate::domain::model::ExternalProjectEntry;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub github: GithubSection,
    pub preview: PreviewSection,
    pub contact: ContactSection,
    pub preferences: PreferencesSection,
    pub output: OutputSection,
    pub externals: Vec<ExternalProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub account: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            account: "AmerAamir".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSection {
    pub api_base: String,
    pub raw_base: String,
    pub per_page: u32,
    pub fallback_branch: String,
    /// 有設定時才會回寫倉庫描述
    pub token: Option<String>,
    pub patch_delay_ms: u64,
}

impl Default for GithubSection {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
            per_page: 100,
            fallback_branch: "master".to_string(),
            token: None,
            patch_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSection {
    pub opengraph_base: String,
    pub proxy_base: String,
    pub screenshot_base: String,
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self {
            opengraph_base: "https://opengraph.githubassets.com".to_string(),
            proxy_base: "https://r.jina.ai".to_string(),
            screenshot_base: "https://api.microlink.io".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub endpoint: String,
    pub recipient: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/portfolio".to_string(),
            recipient: "butt24@uwindsor.ca".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesSection {
    pub path: String,
}

impl Default for PreferencesSection {
    fn default() -> Self {
        Self {
            path: "./preferences.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
        }
    }
}

impl SiteConfig {
    /// 內建網站設定，包含兩個外部專案
    pub fn builtin() -> Self {
        Self {
            externals: ExternalProjectEntry::defaults(),
            ..Default::default()
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置；沒有 `[[externals]]` 時使用內建的外部專案
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let mut config: SiteConfig =
            toml::from_str(&processed_content).map_err(|e| FolioError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        if config.externals.is_empty() {
            config.externals = ExternalProjectEntry::defaults();
        }
        Ok(config)
    }

    /// 替換環境變數 (例如 ${GH_TOKEN})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 設定檔的 token 優先，其次是 GH_TOKEN 環境變數。
    /// 空字串或未替換的 `${...}` 視為未設定。
    pub fn resolve_token(&self) -> Option<String> {
        let usable = |t: &str| !t.trim().is_empty() && !t.starts_with("${");

        self.github
            .token
            .as_deref()
            .filter(|t| usable(t))
            .map(str::to_string)
            .or_else(|| std::env::var("GH_TOKEN").ok().filter(|t| usable(t)))
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_account_name("site.account", &self.site.account)?;
        validation::validate_url("github.api_base", &self.github.api_base)?;
        validation::validate_url("github.raw_base", &self.github.raw_base)?;
        validation::validate_range("github.per_page", self.github.per_page, 1, 100)?;
        validation::validate_non_empty_string(
            "github.fallback_branch",
            &self.github.fallback_branch,
        )?;
        validation::validate_url("preview.opengraph_base", &self.preview.opengraph_base)?;
        validation::validate_url("preview.proxy_base", &self.preview.proxy_base)?;
        validation::validate_url("preview.screenshot_base", &self.preview.screenshot_base)?;
        validation::validate_url("contact.endpoint", &self.contact.endpoint)?;
        validation::validate_non_empty_string("contact.recipient", &self.contact.recipient)?;
        validation::validate_path("preferences.path", &self.preferences.path)?;
        validation::validate_path("output.path", &self.output.path)?;

        for (index, entry) in self.externals.iter().enumerate() {
            validation::validate_non_empty_string(&format!("externals[{}].title", index), &entry.title)?;
            validation::validate_url(&format!("externals[{}].url", index), &entry.url)?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn account(&self) -> &str {
        &self.site.account
    }

    fn api_base(&self) -> &str {
        &self.github.api_base
    }

    fn raw_base(&self) -> &str {
        &self.github.raw_base
    }

    fn per_page(&self) -> u32 {
        self.github.per_page
    }

    fn fallback_branch(&self) -> &str {
        &self.github.fallback_branch
    }

    fn opengraph_base(&self) -> &str {
        &self.preview.opengraph_base
    }

    fn proxy_base(&self) -> &str {
        &self.preview.proxy_base
    }

    fn screenshot_base(&self) -> &str {
        &self.preview.screenshot_base
    }

    fn externals(&self) -> &[ExternalProjectEntry] {
        &self.externals
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn github_token(&self) -> Option<String> {
        self.resolve_token()
    }

    fn patch_delay(&self) -> Duration {
        Duration::from_millis(self.github.patch_delay_ms)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
