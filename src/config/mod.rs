pub mod cli;
pub mod site_config;

#[cfg(feature = "cli")]
use crate::domain::model::CategoryFilter;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use site_config::SiteConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Render portfolio project cards from a GitHub account")]
pub struct CliConfig {
    /// Path to a site TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override [site].account
    #[arg(long)]
    pub account: Option<String>,

    /// Override [output].path
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override [github].api_base
    #[arg(long)]
    pub api_base: Option<String>,

    /// Category shown in the summary listing (all, ml, systems, web)
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    /// Search text applied to the summary listing
    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（沒有指定時使用內建設定），再套用命令列覆蓋
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        let mut site = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::builtin(),
        };

        if let Some(account) = &self.account {
            site.site.account = account.clone();
        }
        if let Some(output_path) = &self.output_path {
            site.output.path = output_path.clone();
        }
        if let Some(api_base) = &self.api_base {
            site.github.api_base = api_base.clone();
        }

        Ok(site)
    }
}
