use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER_DESCRIPTION: &str = "No description provided.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepositoryOwner {
    pub login: String,
}

/// 倉庫列表 API 回傳的單筆倉庫資料，只保留渲染需要的欄位
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub html_url: String,
}

impl RepositoryRecord {
    /// 描述為空或只有空白時需要從 README 補上
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn is_listed(&self) -> bool {
        !self.fork && !self.archived
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalProjectEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_link_label")]
    pub link_label: String,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_link_label() -> String {
    "Learn More".to_string()
}

impl ExternalProjectEntry {
    pub fn defaults() -> Vec<ExternalProjectEntry> {
        vec![
            ExternalProjectEntry {
                title: "Remire.co".to_string(),
                description: "Global hiring platform—contributed to core feature development and integrations.".to_string(),
                url: "https://remire.co/".to_string(),
                link_label: default_link_label(),
                image: Some("images/remire.jpg".to_string()),
            },
            ExternalProjectEntry {
                title: "Proximus+ (Belgium Telco)".to_string(),
                description: "Wallet modules, NBA/NBO cards, personalization; worked within SAFe.".to_string(),
                url: "https://play.google.com/store/apps/details?id=be.belgacom.hello".to_string(),
                link_label: default_link_label(),
                image: Some("images/proximus.jpg".to_string()),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ml,
    Systems,
    Web,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ml => "ml",
            Category::Systems => "systems",
            Category::Web => "web",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "ml" => Ok(CategoryFilter::Only(Category::Ml)),
            "systems" => Ok(CategoryFilter::Only(Category::Systems)),
            "web" => Ok(CategoryFilter::Only(Category::Web)),
            other => Err(format!(
                "unknown category '{}', expected one of: all, ml, systems, web",
                other
            )),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardSource {
    Repository { full_name: String },
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCard {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub keywords: String,
    pub image: String,
    pub image_alt: String,
    pub link: String,
    pub link_label: String,
    pub source: CardSource,
}

impl DisplayCard {
    /// 卡片上實際顯示的文字（標題、描述、連結文字）
    pub fn text_content(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.link_label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    pub cards: Vec<DisplayCard>,
    /// 「已完成專案」計數器的目標值
    pub total_displayed: usize,
    pub generated_at: DateTime<Utc>,
}
