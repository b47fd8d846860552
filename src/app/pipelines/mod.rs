pub mod project_pipeline;
