pub mod cards;
pub mod category;
pub mod filter;
pub mod html;
pub mod navigation;
pub mod summary;
