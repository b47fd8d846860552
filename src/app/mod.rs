pub mod grid;
pub mod pipelines;
