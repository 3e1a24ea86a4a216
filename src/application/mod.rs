// src/application/mod.rs
pub mod api;
pub mod article_detail;
pub mod article_list;
pub mod load;
pub mod tag_directory;
pub mod tag_sampler;

pub use api::{ArticleApi, ArticleQuery, ArticleState, FetchOutcome};
pub use article_detail::{ArticleDetail, ArticleDetailView};
pub use article_list::{ArticleListView, PageResetPolicy};
pub use load::{LoadState, RequestToken};
pub use tag_directory::TagDirectoryView;
pub use tag_sampler::{TagGroup, TagSampler};
