// src/domain/mod.rs
pub mod article;
pub mod error;
pub mod listing;
pub mod route;
pub mod seo;
pub mod share;
pub mod tag;

pub use article::{Article, Author};
pub use error::DomainError;
pub use listing::{ListFilter, PageSize};
pub use route::Route;
pub use seo::{SeoMeta, SiteProfile};
pub use tag::Tag;
