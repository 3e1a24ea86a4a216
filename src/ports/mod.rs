// src/ports/mod.rs
pub mod html;
pub mod markdown;

pub use html::HtmlPresenter;
