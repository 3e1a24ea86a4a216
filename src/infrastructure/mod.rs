// src/infrastructure/mod.rs
pub mod api;
pub mod config;
pub mod renderer;

pub use api::HttpArticleApi;
pub use config::Config;
pub use renderer::ContentRenderer;
