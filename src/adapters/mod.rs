// Adapters layer: concrete implementations for external systems (GitHub, preview services,
// the contact form endpoint and the preferences file).

pub mod contact;
pub mod github;
pub mod patcher;
pub mod preferences;
pub mod preview;
