pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::contact::{ContactClient, ContactMessage, ContactOutcome};
pub use adapters::preferences::{PreferenceStore, Preferences, Theme};
pub use app::grid::ProjectGrid;
pub use config::{cli::LocalStorage, site_config::SiteConfig};
pub use core::{engine::RenderEngine, pipeline::ProjectPipeline};
pub use domain::model::{Category, CategoryFilter, DisplayCard, RenderResult};
pub use utils::error::{FolioError, Result};
