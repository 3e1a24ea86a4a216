// src/application/tag_sampler.rs
use crate::application::api::{ArticleApi, ArticleQuery};
use crate::domain::{Article, Tag};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, instrument};

pub const SAMPLE_SIZE: usize = 3;
pub const ARTICLES_PER_SAMPLED_TAG: u32 = 5;

/// Articles fetched for one sampled tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup {
    pub tag: Tag,
    pub articles: Vec<Article>,
}

/// Pick `count` distinct tags (by name) by shuffle-and-take.
///
/// Best-effort uniform; the randomness source is injected so tests can seed it.
pub fn sample_tags<R: Rng + ?Sized>(tags: &[Tag], count: usize, rng: &mut R) -> Vec<Tag> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<Tag> = tags
        .iter()
        .filter(|t| seen.insert(t.name.as_str()))
        .cloned()
        .collect();

    distinct.shuffle(rng);
    distinct.truncate(count);
    distinct
}

/// Discovery widget: a few random tags with their latest articles
#[derive(Debug, Clone)]
pub struct TagSampler {
    sample_size: usize,
    per_tag: u32,
}

impl Default for TagSampler {
    fn default() -> Self {
        Self::new(SAMPLE_SIZE, ARTICLES_PER_SAMPLED_TAG)
    }
}

impl TagSampler {
    pub fn new(sample_size: usize, per_tag: u32) -> Self {
        Self {
            sample_size,
            per_tag,
        }
    }

    /// Fetch all tags, sample them and fetch each sampled tag's articles in turn.
    ///
    /// Groups keep the sample order. A failed fetch yields an empty group, a failed tag
    /// fetch yields no groups.
    #[instrument(level = "debug", skip_all)]
    pub async fn load<A, R>(&self, api: &A, rng: &mut R) -> Vec<TagGroup>
    where
        A: ArticleApi,
        R: Rng + ?Sized,
    {
        let tags = api.list_tags().await.into_items();
        let sampled = sample_tags(&tags, self.sample_size, rng);
        debug!(
            sampled = ?sampled.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            "Sampled tags"
        );

        let mut groups = Vec::with_capacity(sampled.len());
        for tag in sampled {
            let query = ArticleQuery::for_tag(tag.name.clone(), self.per_tag);
            let articles = api.list_articles(&query).await.into_items();
            groups.push(TagGroup { tag, articles });
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::fixtures::{article, tag};
    use crate::util::testing::MockArticleApi;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn tags(n: u64) -> Vec<Tag> {
        (1..=n).map(|i| tag(i, &format!("tag{}", i))).collect()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(10, 3)]
    fn given_tag_set_when_sampling_then_picks_min_of_three_and_total(
        #[case] total: u64,
        #[case] expected: usize,
    ) {
        let mut rng = StdRng::seed_from_u64(7);

        let sample = sample_tags(&tags(total), SAMPLE_SIZE, &mut rng);

        assert_eq!(sample.len(), expected);
    }

    #[test]
    fn given_many_seeds_when_sampling_then_never_repeats_a_tag() {
        let all = tags(6);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = sample_tags(&all, SAMPLE_SIZE, &mut rng);

            let names: HashSet<_> = sample.iter().map(|t| t.name.clone()).collect();
            assert_eq!(names.len(), sample.len());
        }
    }

    #[test]
    fn given_duplicate_tag_names_when_sampling_then_counts_them_once() {
        let all = vec![tag(1, "go"), tag(2, "go"), tag(3, "rust")];
        let mut rng = StdRng::seed_from_u64(1);

        let sample = sample_tags(&all, SAMPLE_SIZE, &mut rng);

        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn given_same_seed_when_sampling_twice_then_same_sample() {
        let all = tags(8);

        let first = sample_tags(&all, SAMPLE_SIZE, &mut StdRng::seed_from_u64(42));
        let second = sample_tags(&all, SAMPLE_SIZE, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn given_tags_with_articles_when_loading_then_groups_by_sampled_tag() {
        let api = MockArticleApi::builder()
            .with_tag(tag(1, "go"))
            .with_tag(tag(2, "rust"))
            .with_tag_articles("go", vec![article(42, "Go Basics", "go,backend")])
            .with_tag_articles("rust", vec![article(7, "Ownership", "rust")])
            .build();
        let mut rng = StdRng::seed_from_u64(3);

        let groups = TagSampler::default().load(&api, &mut rng).await;

        assert_eq!(groups.len(), 2);
        for group in &groups {
            assert!(group
                .articles
                .iter()
                .all(|a| a.tag_list.contains(&group.tag.name)));
        }
        assert!(api
            .requested_queries()
            .iter()
            .all(|q| q.per_page == Some(ARTICLES_PER_SAMPLED_TAG)));
    }

    #[tokio::test]
    async fn given_no_tags_when_loading_then_no_groups_and_no_article_requests() {
        let api = MockArticleApi::builder().build();
        let mut rng = StdRng::seed_from_u64(3);

        let groups = TagSampler::default().load(&api, &mut rng).await;

        assert!(groups.is_empty());
        assert!(api.requested_queries().is_empty());
    }
}
