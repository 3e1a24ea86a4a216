// src/ports/html.rs
use crate::application::article_detail::ArticleDetail;
use crate::application::{
    ArticleDetailView, ArticleListView, LoadState, TagDirectoryView, TagGroup,
};
use crate::constants::{AVATAR_PX, LIST_THUMBNAIL_PX};
use crate::domain::listing::PAGE_SIZES;
use crate::domain::route::article_path;
use crate::domain::{Article, PageSize, Route, Tag};
use crate::ports::markdown::markdown_to_html;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use tracing::instrument;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1100px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
            color: #1f2937;
        }
        nav { display: flex; gap: 1.5rem; margin-bottom: 2rem; }
        nav a { color: #1f2937; font-weight: 600; text-decoration: none; }
        .layout { display: flex; flex-wrap: wrap; gap: 1rem; }
        .main { flex: 2 1 480px; }
        .aside { flex: 1 1 260px; background: #f3f4f6; padding: 1rem; border-left: 1px solid #d1d5db; }
        .card { background: white; border-radius: 8px; padding: 2rem; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        ul.articles { list-style: none; padding: 0; }
        ul.articles li { border: 1px solid #d1d5db; border-radius: 6px; margin-bottom: 1rem; background: white; }
        ul.articles a { display: flex; gap: 1rem; padding: 1rem; color: inherit; text-decoration: none; }
        ul.articles a:hover { color: #eab308; }
        ul.articles img { object-fit: cover; border-radius: 6px; }
        .muted { color: #6b7280; }
        .small { font-size: 0.8em; }
        .pagination { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; }
        .button { padding: 0.5rem 1rem; background: #d1d5db; border-radius: 6px; color: inherit; text-decoration: none; }
        .button.disabled { opacity: 0.5; }
        .chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
        .chip { padding: 0.4rem 0.8rem; border-radius: 6px; background: #d1d5db; color: #374151; text-decoration: none; }
        .chip.active { background: #3b82f6; color: white; }
        .tag-chip { border-radius: 999px; font-size: 0.9em; }
        .author { display: flex; align-items: center; gap: 1rem; }
        .author img { border-radius: 50%; border: 2px solid #d1d5db; }
        .cover { width: 100%; height: auto; border-radius: 8px; }
        .body pre { white-space: pre-wrap; background-color: #f8f9fa; padding: 1rem; border-radius: 4px; }
        .body code { background-color: #f0f0f0; padding: 2px 4px; border-radius: 3px; font-family: monospace; }
        .share { display: flex; flex-wrap: wrap; gap: 0.5rem; align-items: center; }
        .not-found { color: #ef4444; text-align: center; }
        footer { margin-top: 2rem; }
"#;

/// Renders views as standalone HTML pages
#[derive(Debug, Default)]
pub struct HtmlPresenter {
    link_base: String,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every in-app route with `base`, e.g. the public site URL
    pub fn with_link_base(base: impl Into<String>) -> Self {
        Self {
            link_base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn href(&self, route: &str) -> String {
        format!("{}{}", self.link_base, route)
    }

    /// `route` is the in-app route of this page, shown in the footer for `articleview open`
    fn page(&self, title: &str, route: &str, head: &str, body: &str) -> String {
        let links = if self.link_base.is_empty() {
            "site-relative routes"
        } else {
            self.link_base.as_str()
        };
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>{head}
    <style>{style}</style>
</head>
<body>
    <nav>
        <a href="{home}">Articles</a>
        <a href="{tags}">Tags</a>
    </nav>
{body}
    <footer class="muted small">Links point to {site}. Reopen this page with <code>articleview open '{route}'</code></footer>
</body>
</html>"#,
            title = text(title),
            head = head,
            style = STYLE,
            home = attr(&self.href("/articles")),
            tags = attr(&self.href("/tags")),
            body = body,
            site = text(links),
            route = text(route),
        )
    }

    #[instrument(level = "debug", skip_all, fields(route = %view.route()))]
    pub fn render_list(&self, view: &ArticleListView, groups: &[TagGroup]) -> String {
        let filter = view.filter();

        let list = match view.state() {
            LoadState::Idle | LoadState::Loading => {
                r#"<p class="muted">Loading articles...</p>"#.to_string()
            }
            LoadState::Populated(articles) => {
                let items: String = articles
                    .iter()
                    .map(|a| self.list_item(a, "article-item", true))
                    .collect();
                format!(r#"<ul class="articles">{}</ul>"#, items)
            }
            LoadState::Empty => {
                r#"<p class="muted">No articles found for the selected tag.</p>"#.to_string()
            }
        };

        let previous = match view.previous_route() {
            Some(route) => format!(
                r#"<a class="button" href="{}">Previous</a>"#,
                attr(&self.href(&route))
            ),
            None => r#"<span class="button disabled" aria-disabled="true">Previous</span>"#
                .to_string(),
        };

        let body = format!(
            r#"    <div class="layout">
        <div class="main">
            <h1>Articles</h1>
            {sizes}
            {list}
            <div class="pagination">
                {previous}
                <span>Page {page}</span>
                <a class="button" href="{next}">Next</a>
            </div>
        </div>
        <div class="aside">
            <h2>Filter by Tags</h2>
            {chips}
            {sampled}
        </div>
    </div>"#,
            sizes = self.page_size_picker(view),
            list = list,
            previous = previous,
            page = filter.page,
            next = attr(&self.href(&view.next_route())),
            chips = self.filter_chips(view),
            sampled = self.sampled_groups(groups),
        );

        let title = if filter.has_tag() {
            format!("Articles tagged #{}", filter.tag)
        } else {
            "Articles".to_string()
        };
        self.page(&title, &view.route(), "", &body)
    }

    fn list_item(&self, article: &Article, class: &str, with_cover: bool) -> String {
        let cover = match (&article.cover_image, with_cover) {
            (Some(src), true) => format!(
                r#"<img src="{}" alt="{}" width="{px}" height="{px}">"#,
                attr(src),
                attr(&article.title),
                px = LIST_THUMBNAIL_PX,
            ),
            _ => String::new(),
        };
        let published = if with_cover {
            format!(
                r#"<p class="muted small">Published: {}</p>"#,
                text(&article.readable_publish_date)
            )
        } else {
            String::new()
        };

        format!(
            r#"<li class="{class}"><a href="{href}">{cover}<div><h2>{title}</h2><p class="muted">{description}</p>{published}<p class="muted small">Tags: {tags}</p></div></a></li>"#,
            class = class,
            href = attr(&self.href(&article_path(article.id))),
            cover = cover,
            title = text(&article.title),
            description = text(&article.description),
            published = published,
            tags = text(&article.joined_tags()),
        )
    }

    fn page_size_picker(&self, view: &ArticleListView) -> String {
        let options: String = PAGE_SIZES
            .iter()
            .filter_map(|size| PageSize::new(*size).ok())
            .map(|size| {
                let route = view.per_page_route(size);
                let active = if size == view.filter().per_page { " active" } else { "" };
                format!(
                    r#"<a class="chip{}" href="{}">{}</a>"#,
                    active,
                    attr(&self.href(&route)),
                    size.get()
                )
            })
            .collect();

        format!(
            r#"<div class="chips"><span>Articles per page: </span>{}</div>"#,
            options
        )
    }

    fn filter_chips(&self, view: &ArticleListView) -> String {
        let selected = &view.filter().tag;
        let all_active = if selected.is_empty() { " active" } else { "" };

        let mut chips = format!(
            r#"<a class="chip{}" href="{}">All Articles</a>"#,
            all_active,
            attr(&self.href(&view.tag_route("")))
        );
        for tag in view.tags() {
            let active = if &tag.name == selected { " active" } else { "" };
            chips.push_str(&format!(
                r#"<a class="chip{}" href="{}">#{}</a>"#,
                active,
                attr(&self.href(&view.tag_route(&tag.name))),
                text(&tag.name)
            ));
        }

        format!(r#"<div class="chips">{}</div>"#, chips)
    }

    fn sampled_groups(&self, groups: &[TagGroup]) -> String {
        if groups.is_empty() {
            return r#"<p class="muted">No tags found.</p>"#.to_string();
        }

        groups
            .iter()
            .map(|group| {
                let list = if group.articles.is_empty() {
                    r#"<p class="muted">No articles found for this tag.</p>"#.to_string()
                } else {
                    let items: String = group
                        .articles
                        .iter()
                        .map(|a| self.list_item(a, "sampled-item", false))
                        .collect();
                    format!(r#"<ul class="articles">{}</ul>"#, items)
                };
                format!(
                    r#"<section class="sampled"><h2>Articles for Tag: {}</h2>{}</section>"#,
                    text(&group.tag.name),
                    list
                )
            })
            .collect()
    }

    #[instrument(level = "debug", skip_all, fields(id = view.id()))]
    pub fn render_detail(&self, view: &ArticleDetailView) -> String {
        match view.state() {
            LoadState::Idle | LoadState::Loading => self.page(
                "Loading article...",
                &article_path(view.id()),
                "",
                r#"    <p class="muted">Loading article...</p>"#,
            ),
            LoadState::Empty => self.page(
                "Article not found",
                &article_path(view.id()),
                "",
                r#"    <p class="not-found">Article not found.</p>"#,
            ),
            LoadState::Populated(detail) => self.article_page(detail),
        }
    }

    fn article_page(&self, detail: &ArticleDetail) -> String {
        let article = &detail.article;

        let head: String = detail
            .seo
            .tags()
            .into_iter()
            .map(|(kind, key, content)| {
                format!(
                    "\n    <meta {}=\"{}\" content=\"{}\">",
                    kind,
                    key,
                    attr(content)
                )
            })
            .collect();

        let cover = article
            .cover_image
            .as_ref()
            .map(|src| {
                format!(
                    r#"<img class="cover" src="{}" alt="{}">"#,
                    attr(src),
                    attr(&article.title)
                )
            })
            .unwrap_or_default();

        let tags: String = article
            .tag_list
            .iter()
            .map(|t| format!(r#"<span class="chip tag-chip">#{}</span>"#, text(t)))
            .collect();

        let share: String = detail
            .share_links
            .iter()
            .map(|link| {
                format!(
                    r#"<a class="button share-link" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    attr(&link.href),
                    link.provider.label()
                )
            })
            .collect();

        let body = format!(
            r#"    <article class="card">
        <h1>{title}</h1>
        <div class="author">
            <img src="{avatar}" alt="{author_alt}" width="{px}" height="{px}">
            <div>
                <p><strong>{author}</strong> (@{username})</p>
                <p class="muted">Published on {published}</p>
            </div>
        </div>
        {cover}
        <div class="body">{markdown}</div>
        <div class="chips">{tags}</div>
        <div class="share"><strong>Share: </strong>{share}</div>
    </article>"#,
            title = text(&article.title),
            avatar = attr(&article.user.profile_image),
            author_alt = attr(&article.user.name),
            px = AVATAR_PX,
            author = text(&article.user.name),
            username = text(&article.user.username),
            published = text(&article.readable_publish_date),
            cover = cover,
            markdown = markdown_to_html(&article.body_markdown),
            tags = tags,
            share = share,
        );

        self.page(
            &detail.seo.page_title,
            &article_path(article.id),
            &head,
            &body,
        )
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render_tags(&self, view: &TagDirectoryView) -> String {
        let content = match view.state() {
            LoadState::Idle | LoadState::Loading => {
                r#"<p class="muted">Loading tags...</p>"#.to_string()
            }
            LoadState::Empty => r#"<p class="muted">No tags available.</p>"#.to_string(),
            LoadState::Populated(tags) => {
                let chips: String = tags.iter().map(|t| self.tag_chip(t)).collect();
                format!(
                    r#"<div class="chips"><a class="chip" href="{}">All Articles</a>{}</div>"#,
                    attr(&self.href(&TagDirectoryView::all_route())),
                    chips
                )
            }
        };

        let body = format!(
            r#"    <div class="card">
        <h1>Tags</h1>
        {}
    </div>"#,
            content
        );
        self.page("Tags", &Route::Tags.path(), "", &body)
    }

    fn tag_chip(&self, tag: &Tag) -> String {
        format!(
            r#"<a class="chip tag-chip" style="background-color: {}; color: {};" href="{}">#{}</a>"#,
            tag.background(),
            tag.foreground(),
            attr(&self.href(&TagDirectoryView::tag_route(tag))),
            text(&tag.name)
        )
    }
}
