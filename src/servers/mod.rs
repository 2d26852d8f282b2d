// Modules for server components
pub mod render;
pub mod response_builders;
pub mod web_ui;

// Re-export public APIs
pub use web_ui::{WebUiConfig, WebUiServer};
