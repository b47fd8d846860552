pub use crate::app::pipelines::project_pipeline::{
    ProjectPipeline, ResolvedDescription, CARDS_FILE, GRID_FILE,
};
